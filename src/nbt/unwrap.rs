use serde_json::{Map, Number, Value};

use crate::nbt::decode::Document;
use crate::nbt::tag::{CompoundTag, Tag};

impl Document {
	/// Unwrap the root compound into a plain JSON object.
	pub fn unwrapped(&self) -> Value {
		unwrap_compound(&self.root)
	}
}

/// Strip type metadata from a tag tree, yielding a plain JSON value.
///
/// Pure and deterministic: unwrapping the same tree twice yields structurally
/// equal values.
pub fn unwrap_tag(tag: &Tag) -> Value {
	match tag {
		Tag::End => Value::Null,
		Tag::Byte(v) => Value::from(i64::from(*v)),
		Tag::Short(v) => Value::from(i64::from(*v)),
		Tag::Int(v) => Value::from(i64::from(*v)),
		Tag::Long(v) => Value::from(*v),
		Tag::Float(v) => float_value(f64::from(*v)),
		Tag::Double(v) => float_value(*v),
		Tag::ByteArray(items) => Value::Array(items.iter().map(|item| Value::from(i64::from(*item))).collect()),
		Tag::String(v) => Value::String(v.to_string()),
		Tag::List(list) => Value::Array(list.items.iter().map(unwrap_tag).collect()),
		Tag::Compound(compound) => unwrap_compound(compound),
		Tag::IntArray(items) => Value::Array(items.iter().map(|item| Value::from(i64::from(*item))).collect()),
		Tag::LongArray(items) => Value::Array(items.iter().map(|item| Value::from(*item)).collect()),
	}
}

/// Unwrap compound members into a JSON object in entry order.
pub fn unwrap_compound(compound: &CompoundTag) -> Value {
	let mut out = Map::with_capacity(compound.entries.len());
	for entry in &compound.entries {
		out.insert(entry.name.to_string(), unwrap_tag(&entry.value));
	}
	Value::Object(out)
}

// Non-finite floats have no JSON number form.
fn float_value(value: f64) -> Value {
	Number::from_f64(value).map(Value::Number).unwrap_or(Value::Null)
}
