//! Shape and circle value types with statically bound printing.
//!
//! `Circle` contains a [`Shape`] rather than abstracting over one; both
//! types expose an inherent `print`, so which message gets written is
//! decided by the static type of the receiver. Borrowing the shape out of
//! a circle and printing it writes the shape message. This is intentional:
//! there is no trait object here and no dynamic dispatch to introduce one
//! would change observable behavior.

use std::io::{self, Write};

/// A shape anchored at integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    x: i32,
    y: i32,
}

impl Shape {
    /// Construct a shape, announcing the construction on `out`.
    ///
    /// Construction never fails; a notice that cannot be written is
    /// dropped rather than failing the constructor.
    pub fn new<W: Write>(out: &mut W, x: i32, y: i32) -> Self {
        let _ = writeln!(out, "Shape constructor");
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Write the fixed shape description to `out`.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Shape print")
    }
}

/// A circle: a [`Shape`] position plus a radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    shape: Shape,
    r: i32,
}

impl Circle {
    /// Construct a circle, announcing the shape part first.
    ///
    /// Emits exactly one shape notice followed by one circle notice.
    pub fn new<W: Write>(out: &mut W, x: i32, y: i32, r: i32) -> Self {
        let shape = Shape::new(out, x, y);
        let _ = writeln!(out, "Circle constructor");
        Self { shape, r }
    }

    /// Borrow the shape part. Printing through this reference resolves
    /// to [`Shape::print`], not [`Circle::print`].
    pub fn as_shape(&self) -> &Shape {
        &self.shape
    }

    pub fn radius(&self) -> i32 {
        self.r
    }

    /// Write the fixed circle description to `out`.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Circle print")
    }
}
