// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Internal macros.

/// Declares an enum whose variants map one-to-one to myGEKKO integer codes.
///
/// The generated type gets `code()`, `TryFrom<i64>` (failing with
/// [`ValueError::UnknownCode`](crate::error::ValueError::UnknownCode)) and a
/// `Display` impl that prints the code, which is also the command encoding.
macro_rules! vendor_code {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Returns the vendor code of this variant.
            #[must_use]
            pub const fn code(self) -> i64 {
                match self {
                    $( Self::$variant => $code, )+
                }
            }
        }

        impl TryFrom<i64> for $name {
            type Error = $crate::error::ValueError;

            fn try_from(code: i64) -> ::core::result::Result<Self, Self::Error> {
                match code {
                    $( $code => ::core::result::Result::Ok(Self::$variant), )+
                    code => ::core::result::Result::Err($crate::error::ValueError::UnknownCode {
                        kind: stringify!($name),
                        code,
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    // The crate's single-parameter alias is in scope, as in the domain modules.
    #[allow(unused_imports)]
    use crate::error::{Result, ValueError};

    vendor_code! {
        enum Gear {
            Reverse = -1,
            Neutral = 0,
            First = 1,
        }
    }

    #[test]
    fn codes_round_trip() {
        assert_eq!(Gear::try_from(-1), Ok(Gear::Reverse));
        assert_eq!(Gear::Neutral.code(), 0);
        assert_eq!(Gear::First.to_string(), "1");
    }

    #[test]
    fn unknown_code() {
        assert!(matches!(
            Gear::try_from(7),
            Err(ValueError::UnknownCode { kind: "Gear", code: 7 })
        ));
    }
}
