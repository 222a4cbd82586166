// This is a part of Clockspan.
// See README.md and LICENSE.txt for details.

#![cfg_attr(docsrs, doc(cfg(feature = "bincode")))]

use alloc::string::{String, ToString};

use bincode::{
    de::{BorrowDecoder, Decoder},
    enc::Encoder,
    error::{DecodeError, EncodeError},
    BorrowDecode, Decode, Encode,
};

use crate::{Clock, Error};

impl Encode for Clock {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<(), EncodeError> {
        let v = self.to_string();

        <String>::encode(&v, encoder)
    }
}

impl<Context> Decode<Context> for Clock {
    fn decode<D: Decoder<Context = Context>>(decoder: &mut D) -> Result<Self, DecodeError> {
        let value = <String>::decode(decoder)?;

        value.parse().map_err(|e: Error| DecodeError::OtherString(e.to_string()))
    }
}

impl<'de, Context> BorrowDecode<'de, Context> for Clock {
    fn borrow_decode<D: BorrowDecoder<'de, Context = Context>>(
        decoder: &mut D,
    ) -> Result<Self, DecodeError> {
        let value = <String>::borrow_decode(decoder)?;

        value.parse().map_err(|e: Error| DecodeError::OtherString(e.to_string()))
    }
}
