//! Zero-equivalents: the value a field holds before anything is set, and the
//! value `clear` passes to every setter.

use proc_macro2::{Literal, TokenStream};
use quote::quote;

use crate::generator::descriptor::{FieldDescriptor, Scalar};

/// Zero-equivalent of `field`.
///
/// Scalars get a literal carrying its type suffix so the value selects the right
/// overload of a bare setter. Other fields get `None`, written `None::<T>` when
/// `qualify_absent` is set because the receiving parameter is generic.
pub(crate) fn zero_value(field: &FieldDescriptor, qualify_absent: bool) -> TokenStream {
  if field.primitive_like
    && let Some(scalar) = field.semantic_type.scalar()
  {
    return scalar_zero(scalar);
  }

  if qualify_absent {
    let ty = &field.semantic_type;
    quote! { None::<#ty> }
  } else {
    quote! { None }
  }
}

pub(crate) fn scalar_zero(scalar: Scalar) -> TokenStream {
  let literal = match scalar {
    Scalar::Bool => return quote! { false },
    Scalar::Char => Literal::character('\0'),
    Scalar::I8 => Literal::i8_suffixed(0),
    Scalar::I16 => Literal::i16_suffixed(0),
    Scalar::I32 => Literal::i32_suffixed(0),
    Scalar::I64 => Literal::i64_suffixed(0),
    Scalar::I128 => Literal::i128_suffixed(0),
    Scalar::Isize => Literal::isize_suffixed(0),
    Scalar::U8 => Literal::u8_suffixed(0),
    Scalar::U16 => Literal::u16_suffixed(0),
    Scalar::U32 => Literal::u32_suffixed(0),
    Scalar::U64 => Literal::u64_suffixed(0),
    Scalar::U128 => Literal::u128_suffixed(0),
    Scalar::Usize => Literal::usize_suffixed(0),
    Scalar::F32 => Literal::f32_suffixed(0.0),
    Scalar::F64 => Literal::f64_suffixed(0.0),
  };
  quote! { #literal }
}
