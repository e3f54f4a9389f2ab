//! The three user-defined types used by the program.
use std::fmt;
use std::io::{self, Write};

/// A closed choice between two variants.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum MyEnum {
    #[default]
    First,
    Second,
}

impl fmt::Display for MyEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MyEnum::First => write!(f, "First"),
            MyEnum::Second => write!(f, "Second"),
        }
    }
}

/// A plain record: an id and a one-character label.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct MyStruct {
    pub id: i32,
    pub name: char,
}

/// A type without state that knows how to announce itself.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct MyClass;

impl MyClass {
    pub const MESSAGE: &'static str = "Inside myClass";

    /// Writes [`MyClass::MESSAGE`] followed by a newline.
    pub fn display<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", Self::MESSAGE)
    }
}

#[test]
fn my_struct_fields_test() {
    let s = MyStruct { id: 1, name: 'a' };
    assert_eq!(s.id, 1);
    assert_eq!(s.name, 'a');

    let quote = MyStruct { id: -7, name: '\'' };
    assert_eq!((quote.id, quote.name), (-7, '\''));
}

#[test]
fn my_enum_test() {
    assert_eq!(MyEnum::default(), MyEnum::First);
    assert_ne!(MyEnum::First, MyEnum::Second);
    assert_eq!(MyEnum::First.to_string(), "First");
    assert_eq!(MyEnum::Second.to_string(), "Second");
}

#[test]
fn my_class_display_test() {
    let mut out = Vec::new();
    MyClass.display(&mut out).unwrap();
    MyClass::default().display(&mut out).unwrap();
    assert_eq!(out, b"Inside myClass\nInside myClass\n");
}
