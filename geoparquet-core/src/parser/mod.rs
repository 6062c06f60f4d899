use crate::error::{ParseError, RenderError};
use crate::types::Bbox;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Auto,
}

#[derive(Debug, Clone)]
pub struct ParsedBbox {
    pub bbox: Bbox,
    pub format: DocumentFormat,
}

/// Parses a bbox object from `input`.
///
/// A declared field whose value is not an array of strings is an error;
/// it is never coerced or moved into `additional_properties`.
pub fn parse_bbox_str(input: &str, format: DocumentFormat) -> Result<ParsedBbox, ParseError> {
    match format {
        DocumentFormat::Json => Ok(ParsedBbox {
            bbox: serde_json::from_str::<Bbox>(input)?,
            format,
        }),
        DocumentFormat::Yaml => Ok(ParsedBbox {
            bbox: bbox_from_yaml(input)?,
            format,
        }),
        DocumentFormat::Auto => parse_bbox_auto(input),
    }
}

/// YAML goes through a JSON value first so plain scalars keep their
/// resolved type (`1`, `true`) instead of being read back as strings.
fn bbox_from_yaml(input: &str) -> Result<Bbox, ParseError> {
    let value = serde_yaml::from_str::<serde_json::Value>(input)?;
    serde_json::from_value::<Bbox>(value).map_err(ParseError::YamlShape)
}

fn parse_bbox_auto(input: &str) -> Result<ParsedBbox, ParseError> {
    // JSON always starts with `{` or `[` after trimming.
    let trimmed = input.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return match serde_json::from_str::<Bbox>(input) {
            Ok(bbox) => Ok(ParsedBbox {
                bbox,
                format: DocumentFormat::Json,
            }),
            // Flow-style YAML also starts with `{`, but only a syntax error
            // means the input might not be JSON at all.
            Err(e) if e.is_syntax() => bbox_from_yaml(input)
                .map(|bbox| ParsedBbox {
                    bbox,
                    format: DocumentFormat::Yaml,
                })
                .map_err(|_| ParseError::Json(e)),
            Err(e) => Err(ParseError::Json(e)),
        };
    }

    match bbox_from_yaml(input) {
        Ok(bbox) => Ok(ParsedBbox {
            bbox,
            format: DocumentFormat::Yaml,
        }),
        Err(e) => {
            if let Ok(bbox) = serde_json::from_str::<Bbox>(input) {
                return Ok(ParsedBbox {
                    bbox,
                    format: DocumentFormat::Json,
                });
            }
            Err(e)
        }
    }
}

/// Renders `bbox` as pretty JSON or YAML. `Auto` renders JSON.
///
/// An extension entry named like a declared bound field is refused, since
/// the output would either repeat the key or fail to parse back.
pub fn render_bbox(bbox: &Bbox, format: DocumentFormat) -> Result<String, RenderError> {
    if let Some(key) = bbox
        .additional_properties
        .keys()
        .find(|k| Bbox::FIELD_NAMES.contains(&k.as_str()))
    {
        return Err(RenderError::ReservedKey(key.clone()));
    }

    match format {
        DocumentFormat::Json | DocumentFormat::Auto => {
            serde_json::to_string_pretty(bbox).map_err(RenderError::Json)
        }
        DocumentFormat::Yaml => serde_yaml::to_string(bbox).map_err(RenderError::Yaml),
    }
}
