// Copyright 2021 Drift Labs
// Copyright 2025 INSTADAPP LABS INC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Portions of this code are derived from Drift Protocol
// Original source: https://github.com/drift-labs/protocol-v2/blob/master/programs/drift/src/math/ceil_div.rs
// Modified by INSTADAPP LABS INC

use num_traits::{PrimInt, Zero};

pub trait CheckedCeilDiv: Sized {
    /// Division rounded towards positive infinity
    fn checked_ceil_div(&self, rhs: Self) -> Option<Self>;
}

/// Shared body for every integer width, signed or not.
#[inline]
fn ceil_div<T: PrimInt>(lhs: T, rhs: T) -> Option<T> {
    let quotient = lhs.checked_div(&rhs)?;
    let remainder = lhs % rhs;

    // a non-zero remainder with the divisor's sign means the true quotient was truncated downwards
    if remainder != T::zero() && (remainder > T::zero()) == (rhs > T::zero()) {
        quotient.checked_add(&T::one())
    } else {
        Some(quotient)
    }
}

macro_rules! checked_impl {
    ($t:ty) => {
        impl CheckedCeilDiv for $t {
            #[track_caller]
            #[inline]
            fn checked_ceil_div(&self, rhs: $t) -> Option<$t> {
                if rhs.is_zero() {
                    return None;
                }
                ceil_div(*self, rhs)
            }
        }
    };
}

checked_impl!(u128);
checked_impl!(u64);
checked_impl!(u32);
checked_impl!(u8);
checked_impl!(i128);
checked_impl!(i64);
