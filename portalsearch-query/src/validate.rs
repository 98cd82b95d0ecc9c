//! Schema check of the raw inbound query.
//!
//! Runs before anything else in the pipeline. A failure here means no
//! upstream request is issued.

use crate::error::{QueryError, QueryResult};
use crate::sort::validate_sort;
use portalsearch_geo::Envelope;
use portalsearch_types::{
    GeometryFilter, GeometryType, InboundQuery, RequestQuery, SpatialReferenceHint,
};
use serde_json::{Map, Value};

/// Validates a raw query bag and returns its typed form.
///
/// Unknown keys are ignored. Numeric fields accept JSON numbers and numeric
/// strings, since query-string values arrive as text.
pub fn validate_request_query(query: &RequestQuery) -> QueryResult<InboundQuery> {
    let geometry_type = optional_string(query, "geometryType")?.map(|t| GeometryType::parse(&t));

    let geometry = match &geometry_type {
        Some(kind) if kind.is_envelope() => match present(query, "geometry") {
            Some(value) => Some(parse_geometry(value)?),
            None => return Err(QueryError::validation("\"geometry\" is required")),
        },
        _ => None,
    };

    let order_by = match present(query, "orderByFields") {
        Some(value) => parse_order_by(value)?,
        None => None,
    };
    if let Some(spec) = &order_by {
        validate_sort(spec)?;
    }

    Ok(InboundQuery {
        where_clause: optional_string(query, "where")?,
        result_record_count: positive_int(query, "resultRecordCount")?,
        result_offset: positive_int(query, "resultOffset")?,
        num: positive_int(query, "num")?,
        in_sr: parse_in_sr(query)?,
        out_sr: positive_int(query, "outSR")?,
        order_by,
        geometry,
        geometry_type,
    })
}

/// Returns the value for `key`, treating JSON null as absent.
fn present<'a>(query: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    query.get(key).filter(|v| !v.is_null())
}

fn optional_string(query: &Map<String, Value>, key: &str) -> QueryResult<Option<String>> {
    match present(query, key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(QueryError::validation(format!("\"{key}\" must be a string"))),
    }
}

fn positive_int(query: &Map<String, Value>, key: &str) -> QueryResult<Option<u32>> {
    match present(query, key) {
        None => Ok(None),
        Some(value) => as_positive_int(value)
            .map(Some)
            .map_err(|reason| QueryError::validation(format!("\"{key}\" {reason}"))),
    }
}

/// Interprets a number or numeric string as a positive 32-bit integer.
fn as_positive_int(value: &Value) -> Result<u32, &'static str> {
    let number = match value {
        Value::Number(n) => n.as_f64().ok_or("must be a number")?,
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| "must be a number")?,
        _ => return Err("must be a number"),
    };
    if !number.is_finite() {
        return Err("must be a number");
    }
    if number <= 0.0 {
        return Err("must be a positive number");
    }
    if number.fract() != 0.0 {
        return Err("must be an integer");
    }
    if number > f64::from(u32::MAX) {
        return Err("must be a safe number");
    }
    Ok(number as u32)
}

fn parse_in_sr(query: &Map<String, Value>) -> QueryResult<Option<SpatialReferenceHint>> {
    let Some(value) = present(query, "inSR") else {
        return Ok(None);
    };
    let invalid = || QueryError::validation("\"inSR\" must be one of [number, object]");

    match value {
        Value::Number(_) | Value::String(_) => as_positive_int(value)
            .map(|wkid| Some(SpatialReferenceHint::Wkid(wkid)))
            .map_err(|_| invalid()),
        Value::Object(map) => {
            if let Some(wkid) = present(map, "wkid") {
                let wkid = as_positive_int(wkid).map_err(|reason| {
                    QueryError::validation(format!("\"inSR.wkid\" {reason}"))
                })?;
                Ok(Some(SpatialReferenceHint::Wkid(wkid)))
            } else if let Some(Value::String(wkt)) = present(map, "wkt") {
                Ok(Some(SpatialReferenceHint::Wkt(wkt.clone())))
            } else {
                Err(invalid())
            }
        }
        _ => Err(invalid()),
    }
}

/// Accepts `{orderBy}` objects and bare strings.
fn parse_order_by(value: &Value) -> QueryResult<Option<String>> {
    match value {
        Value::String(spec) => Ok(Some(spec.clone())),
        Value::Object(map) => {
            if let Some(key) = map.keys().find(|k| k.as_str() != "orderBy") {
                return Err(QueryError::validation(format!(
                    "\"orderByFields.{key}\" is not allowed"
                )));
            }
            match present(map, "orderBy") {
                None => Ok(None),
                Some(Value::String(spec)) => Ok(Some(spec.clone())),
                Some(_) => Err(QueryError::validation(
                    "\"orderByFields.orderBy\" must be a string",
                )),
            }
        }
        _ => Err(QueryError::validation(
            "\"orderByFields\" must be of type object",
        )),
    }
}

/// Parses the rectangle filter from an object, an array, a JSON string or a
/// comma separated string.
pub fn parse_geometry(value: &Value) -> QueryResult<GeometryFilter> {
    match value {
        Value::Object(map) => parse_envelope_object(map, value),
        Value::Array(_) => Envelope::from_json(value)
            .map(|e| GeometryFilter::Bounds(e.bounds()))
            .ok_or_else(|| {
                QueryError::validation("\"geometry\" must contain 4 numeric items")
            }),
        Value::String(text) => {
            let text = text.trim();
            if text.starts_with('{') || text.starts_with('[') {
                let parsed: Value = serde_json::from_str(text).map_err(|e| {
                    QueryError::validation(format!("\"geometry\" must be valid JSON: {e}"))
                })?;
                parse_geometry(&parsed)
            } else {
                Envelope::from_delimited(text)
                    .map(|e| GeometryFilter::Bounds(e.bounds()))
                    .ok_or_else(no_match)
            }
        }
        _ => Err(no_match()),
    }
}

fn parse_envelope_object(map: &Map<String, Value>, value: &Value) -> QueryResult<GeometryFilter> {
    let envelope = Envelope::from_json(value).ok_or_else(|| {
        let missing = ["xmin", "ymin", "xmax", "ymax"]
            .into_iter()
            .find(|k| !map.get(*k).is_some_and(Value::is_number))
            .unwrap_or("xmin");
        QueryError::validation(format!("\"geometry.{missing}\" must be a number"))
    })?;

    let wkid = match present(map, "spatialReference") {
        None => None,
        Some(Value::Object(sr)) => {
            let wkid = present(sr, "wkid").ok_or_else(|| {
                QueryError::validation("\"geometry.spatialReference.wkid\" is required")
            })?;
            Some(as_positive_int(wkid).map_err(|reason| {
                QueryError::validation(format!("\"geometry.spatialReference.wkid\" {reason}"))
            })?)
        }
        Some(_) => {
            return Err(QueryError::validation(
                "\"geometry.spatialReference\" must be of type object",
            ));
        }
    };

    Ok(GeometryFilter::Envelope {
        xmin: envelope.xmin,
        ymin: envelope.ymin,
        xmax: envelope.xmax,
        ymax: envelope.ymax,
        wkid,
    })
}

fn no_match() -> QueryError {
    QueryError::validation("\"geometry\" does not match any of the allowed types")
}
