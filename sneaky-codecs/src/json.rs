use sneaky_core::{
    Codec, Error, Result,
    serde::{Serialize, de::DeserializeOwned},
};

/// `serde_json` backed codec. Compact output unless built with
/// [`JsonCodec::pretty`].
#[derive(Debug, Clone, Default)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }
}

impl Codec for JsonCodec {
    fn encode<S: Serialize + ?Sized>(&self, obj: &S) -> Result<String> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(obj)
        } else {
            serde_json::to_string(obj)
        };
        encoded.map_err(|e| Error::Encode(e.to_string()))
    }

    fn decode_slice<D: DeserializeOwned>(&self, data: &[u8]) -> Result<D> {
        serde_json::from_slice(data).map_err(|e: serde_json::Error| Error::Decode(e.to_string()))
    }

    fn decode_str<D: DeserializeOwned>(&self, text: &str) -> Result<D> {
        serde_json::from_str(text).map_err(|e: serde_json::Error| Error::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct WithA {
        a: i64,
    }

    #[test]
    fn compact_by_default() {
        let codec = JsonCodec::default();
        assert_eq!(codec.encode(&WithA { a: 1 }).unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn pretty_output_is_indented() {
        let codec = JsonCodec::pretty();
        assert!(codec.is_pretty());
        assert_eq!(codec.encode(&WithA { a: 1 }).unwrap(), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn non_string_map_keys_fail_to_encode() {
        let mut map = HashMap::new();
        map.insert((1, 2), "tuple key");

        let err = JsonCodec::default().encode(&map).unwrap_err();
        assert!(matches!(err, Error::Encode(_)));
    }

    #[test]
    fn invalid_utf8_fails_to_decode() {
        let result: Result<String> = JsonCodec::default().decode_slice(b"\"\xff\"");
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn decode_error_carries_serde_message() {
        let result: Result<WithA> = JsonCodec::default().decode_str("not json");
        match result {
            Err(Error::Decode(message)) => assert!(message.contains("line 1"), "{message}"),
            other => panic!("expected a decode error, got {other:?}"),
        }
    }
}
