//! Compact JSON encoder for [`Value`] trees.
//!
//! Exists to close the loop on parsing: a parsed tree can be re-emitted
//! and re-parsed to an equal tree. Not a pretty-printer.

use crate::value::Value;

pub fn to_string(value: &Value) -> String {
    let mut writer = Writer::new();
    writer.write_value(value);
    writer.finish()
}

struct Writer {
    buffer: String,
}

impl Writer {
    fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    fn finish(self) -> String {
        self.buffer
    }

    fn write_value(&mut self, value: &Value) {
        match value {
            Value::Null => self.buffer.push_str("null"),
            Value::Bool(true) => self.buffer.push_str("true"),
            Value::Bool(false) => self.buffer.push_str("false"),
            Value::Number(n) => self.write_number(*n),
            Value::String(s) => self.write_quoted_string(s),
            Value::Array(items) => {
                self.buffer.push('[');
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        self.buffer.push(',');
                    }
                    self.write_value(item);
                }
                self.buffer.push(']');
            }
            Value::Object(members) => {
                self.buffer.push('{');
                for (idx, (key, item)) in members.iter().enumerate() {
                    if idx > 0 {
                        self.buffer.push(',');
                    }
                    self.write_quoted_string(key);
                    self.buffer.push(':');
                    self.write_value(item);
                }
                self.buffer.push('}');
            }
        }
    }

    /// Integer-valued doubles print without a fraction; everything else
    /// goes through ryu. The grammar cannot produce NaN or infinities,
    /// but a hand-built tree can, so fall back to null like serde_json.
    fn write_number(&mut self, n: f64) {
        if !n.is_finite() {
            self.buffer.push_str("null");
            return;
        }
        if n.fract() == 0.0 && n.abs() <= i64::MAX as f64 {
            let mut buf = itoa::Buffer::new();
            self.buffer.push_str(buf.format(n as i64));
            return;
        }
        let mut buf = ryu::Buffer::new();
        self.buffer.push_str(buf.format(n));
    }

    fn write_quoted_string(&mut self, s: &str) {
        self.buffer.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.buffer.push_str("\\\""),
                '\\' => self.buffer.push_str("\\\\"),
                '\u{0008}' => self.buffer.push_str("\\b"),
                '\u{000C}' => self.buffer.push_str("\\f"),
                '\n' => self.buffer.push_str("\\n"),
                '\r' => self.buffer.push_str("\\r"),
                '\t' => self.buffer.push_str("\\t"),
                ch if (ch as u32) < 0x20 => {
                    self.buffer.push_str(&format!("\\u{:04x}", ch as u32));
                }
                ch => self.buffer.push(ch),
            }
        }
        self.buffer.push('"');
    }
}
