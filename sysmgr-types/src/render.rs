//! Diagnostic text form of field values.
//!
//! Rendering is for logs and debugging only. The output is not a wire format
//! and is not meant to be parsed back.

use std::collections::BTreeMap;
use std::fmt::{self, Write};

use crate::Timestamp;

/// A value that can be written into an entity's diagnostic rendering.
///
/// Strings render raw, lists as `[a, b]`, maps as `{k=v, k2=v2}`.
pub trait Render {
    fn render(&self, out: &mut dyn Write) -> fmt::Result;
}

/// Renders a value into a fresh `String`.
#[must_use]
pub fn rendered<T: Render + ?Sized>(value: &T) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = value.render(&mut out);
    out
}

impl Render for str {
    fn render(&self, out: &mut dyn Write) -> fmt::Result {
        out.write_str(self)
    }
}

impl Render for String {
    fn render(&self, out: &mut dyn Write) -> fmt::Result {
        out.write_str(self)
    }
}

macro_rules! render_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {
                fn render(&self, out: &mut dyn Write) -> fmt::Result {
                    write!(out, "{self}")
                }
            }
        )*
    };
}

render_display!(i32, i64, bool, Timestamp);

impl<T: Render> Render for [T] {
    fn render(&self, out: &mut dyn Write) -> fmt::Result {
        out.write_char('[')?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                out.write_str(", ")?;
            }
            item.render(out)?;
        }
        out.write_char(']')
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self, out: &mut dyn Write) -> fmt::Result {
        self.as_slice().render(out)
    }
}

impl<K: Render, V: Render> Render for BTreeMap<K, V> {
    fn render(&self, out: &mut dyn Write) -> fmt::Result {
        out.write_char('{')?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                out.write_str(", ")?;
            }
            key.render(out)?;
            out.write_char('=')?;
            value.render(out)?;
        }
        out.write_char('}')
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, out: &mut dyn Write) -> fmt::Result {
        (**self).render(out)
    }
}
