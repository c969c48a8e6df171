use crate::{Codec, Result, serde::de::DeserializeOwned};

/// Input accepted by `deserialize`: raw bytes or text.
pub trait Payload: Send + Sync {
    fn decode_with<C: Codec, D: DeserializeOwned>(&self, codec: &C) -> Result<D>;
}

impl Payload for [u8] {
    fn decode_with<C: Codec, D: DeserializeOwned>(&self, codec: &C) -> Result<D> {
        codec.decode_slice(self)
    }
}

impl Payload for Vec<u8> {
    fn decode_with<C: Codec, D: DeserializeOwned>(&self, codec: &C) -> Result<D> {
        codec.decode_slice(self)
    }
}

impl Payload for str {
    fn decode_with<C: Codec, D: DeserializeOwned>(&self, codec: &C) -> Result<D> {
        codec.decode_str(self)
    }
}

impl Payload for String {
    fn decode_with<C: Codec, D: DeserializeOwned>(&self, codec: &C) -> Result<D> {
        codec.decode_str(self)
    }
}

impl<P: Payload + ?Sized> Payload for &P {
    fn decode_with<C: Codec, D: DeserializeOwned>(&self, codec: &C) -> Result<D> {
        (**self).decode_with(codec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Error,
        serde::{Deserialize, Serialize, de::value::StrDeserializer},
    };

    // Reports which entry point it was called through instead of decoding.
    struct RouteCodec;

    fn route<D: DeserializeOwned>(name: &str) -> Result<D> {
        D::deserialize(StrDeserializer::<crate::serde::de::value::Error>::new(name))
            .map_err(|e| Error::Decode(e.to_string()))
    }

    impl Codec for RouteCodec {
        fn encode<S: Serialize + ?Sized>(&self, _obj: &S) -> Result<String> {
            Err(Error::Encode("not used".into()))
        }

        fn decode_slice<D: DeserializeOwned>(&self, _data: &[u8]) -> Result<D> {
            route("slice")
        }

        fn decode_str<D: DeserializeOwned>(&self, _text: &str) -> Result<D> {
            route("str")
        }
    }

    fn routed<P: Payload + ?Sized>(payload: &P) -> String {
        payload.decode_with(&RouteCodec).unwrap()
    }

    #[test]
    fn bytes_go_through_decode_slice() {
        assert_eq!(routed(b"{}".as_slice()), "slice");
        assert_eq!(routed(&b"{}".to_vec()), "slice");
    }

    #[test]
    fn text_goes_through_decode_str() {
        assert_eq!(routed("{}"), "str");
        assert_eq!(routed(&"{}".to_string()), "str");
        assert_eq!(routed(&&"{}"), "str");
    }

    #[test]
    fn codec_errors_pass_through() {
        #[derive(Debug, Deserialize)]
        struct NotAString {
            _a: u8,
        }

        let result: Result<NotAString> = "{}".decode_with(&RouteCodec);
        assert!(matches!(result, Err(Error::Decode(_))));
    }
}
