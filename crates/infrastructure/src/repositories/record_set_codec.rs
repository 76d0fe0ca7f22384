//! Stored form of a record set: a JSON array holding the presentation text
//! of each record, in append order.

use ferrous_dyndns_domain::{DomainError, ResourceRecord};

pub fn encode(records: &[ResourceRecord]) -> Result<Vec<u8>, DomainError> {
    let texts: Vec<String> = records.iter().map(ToString::to_string).collect();
    serde_json::to_vec(&texts).map_err(|e| {
        DomainError::SerializationFailure(format!("Failed to encode record set: {}", e))
    })
}

/// Decode a stored record set. One unreadable entry fails the whole set.
pub fn decode(bytes: &[u8]) -> Result<Vec<ResourceRecord>, DomainError> {
    let texts: Vec<String> = serde_json::from_slice(bytes).map_err(|e| {
        DomainError::SerializationFailure(format!("Failed to decode record set: {}", e))
    })?;

    texts
        .iter()
        .map(|text| {
            text.parse::<ResourceRecord>().map_err(|e| match e {
                DomainError::SerializationFailure(_) => e,
                other => DomainError::SerializationFailure(format!(
                    "Stored record '{}' is unreadable: {}",
                    text, other
                )),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrous_dyndns_domain::DomainName;

    #[test]
    fn test_encoded_form_is_json_array_of_record_text() {
        let rr = ResourceRecord::address(
            DomainName::parse("host.example.com").unwrap(),
            300,
            "192.0.2.1".parse().unwrap(),
        );
        let bytes = encode(&[rr]).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"["host.example.com.\t300\tIN\tA\t192.0.2.1"]"#
        );
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode(b"not json"),
            Err(DomainError::SerializationFailure(_))
        ));
    }

    #[test]
    fn test_decode_rejects_unmanaged_record_text() {
        let bytes = br#"["host.example.com. 300 IN A 192.0.2.1", "host.example.com. 300 IN TXT hi"]"#;
        assert!(matches!(
            decode(bytes),
            Err(DomainError::SerializationFailure(_))
        ));
    }
}
