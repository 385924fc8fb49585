use accounts_core::{Schema, ValidationError};
use serde_json::{Map, Value};

/// A request body taken as a loose JSON object so field errors can be
/// reported one by one instead of as a single deserialization failure.
pub type JsonObject = Map<String, Value>;

/// Pull every field `schema` knows about out of `body` and validate them.
///
/// Absent fields come back as `None`; a present field that is not a JSON
/// string fails with [`ValidationError::NotAString`].
pub fn schema_fields<'a>(
    body: &'a JsonObject,
    schema: &Schema,
) -> Result<Vec<(&'static str, Option<&'a str>)>, ValidationError> {
    let mut fields = Vec::with_capacity(schema.rules.len());

    for rule in schema.rules {
        let value = match body.get(rule.field) {
            None => None,
            Some(Value::String(value)) => Some(value.as_str()),
            Some(_) => return Err(ValidationError::NotAString(rule.field.to_owned())),
        };
        fields.push((rule.field, value));
    }

    schema.validate(&fields)?;
    Ok(fields)
}

/// Value of `field` in an already validated field list.
pub fn field<'a>(fields: &[(&'static str, Option<&'a str>)], name: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|(field, _)| *field == name)
        .and_then(|(_, value)| *value)
}

/// Like [`field`], for fields the schema marks as required.
pub fn required_field<'a>(
    fields: &[(&'static str, Option<&'a str>)],
    name: &'static str,
) -> Result<&'a str, ValidationError> {
    field(fields, name).ok_or(ValidationError::Required(name))
}
