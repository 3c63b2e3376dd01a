//! Response unwrapping helpers.
//!
//! Each endpoint documents a fixed field chain into the decoded response where
//! its result set lives. A missing chain is not an error: the endpoint yields
//! an empty sequence.

use serde_json::Value;

/// Take the value at `path` out of `value`, as a sequence.
///
/// - absent or `null` yields an empty sequence
/// - an array yields its elements
/// - any other value yields a one-element sequence
pub fn take_sequence(mut value: Value, path: &[&str]) -> Vec<Value> {
    let Some((last, parents)) = path.split_last() else {
        return into_sequence(value);
    };

    let taken = field_path_mut(&mut value, parents)
        .and_then(|parent| parent.as_object_mut())
        .and_then(|object| object.remove(*last));

    taken.map(into_sequence).unwrap_or_default()
}

/// Walk a chain of object keys.
///
/// Returns `None` as soon as a key is absent or a non-object is reached.
fn field_path_mut<'a>(value: &'a mut Value, path: &[&str]) -> Option<&'a mut Value> {
    path.iter()
        .try_fold(value, |current, key| current.get_mut(*key))
}

fn into_sequence(value: Value) -> Vec<Value> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        other => vec![other],
    }
}

/// Flatten a SIRI stop monitoring response into its vehicle journeys.
///
/// Collects `ServiceDelivery.StopMonitoringDelivery[*].MonitoredStopVisit[*].MonitoredVehicleJourney`
/// in document order. A delivery list that is missing or not an array yields
/// an empty sequence; a delivery whose visit list is missing or not an array
/// is skipped, as is a visit without a vehicle journey.
pub fn flatten_stop_visits(mut value: Value) -> Vec<Value> {
    let Some(Value::Array(deliveries)) =
        field_path_mut(&mut value, &["ServiceDelivery", "StopMonitoringDelivery"]).map(Value::take)
    else {
        return Vec::new();
    };

    deliveries
        .into_iter()
        .filter_map(|mut delivery| match delivery.get_mut("MonitoredStopVisit").map(Value::take) {
            Some(Value::Array(visits)) => Some(visits),
            _ => None,
        })
        .flatten()
        .filter_map(|mut visit| {
            visit
                .as_object_mut()
                .and_then(|visit| visit.remove("MonitoredVehicleJourney"))
        })
        .collect()
}
