//! # Arbitrary precision rational
//!
//! Arithmetic combines the stored pairs without reducing them. Everything that observes the value
//! (equality, hashing, ordering and formatting) goes through the canonical form instead.
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::ops::{Add, Mul, Neg, Sub};

use log::debug;
use num::{BigInt, One, Zero};

use crate::data::number_types::rational::Rational;
use crate::error::RationalError;

mod with_primitive;

/// A fraction of two `BigInt`s.
///
/// The denominator is never zero. Otherwise, the pair is stored as it was produced: `2/4` and
/// `-1/-2` are both kept as written, but compare, hash and print as `1/2`.
#[derive(Clone, Debug)]
pub struct Big {
    pub(super) numerator: BigInt,
    pub(super) denominator: BigInt,
}

impl Big {
    /// Create a fraction from a numerator and denominator, without reducing it.
    ///
    /// # Errors
    ///
    /// `RationalError::DivisionByZero` if `denominator` is zero.
    pub fn new(numerator: BigInt, denominator: BigInt) -> Result<Self, RationalError> {
        if denominator.is_zero() {
            debug!("Rejected fraction {}/0", numerator);
            return Err(RationalError::DivisionByZero);
        }

        Ok(Self { numerator, denominator })
    }

    /// Create a fraction from any two integers that convert into a `BigInt`.
    ///
    /// # Errors
    ///
    /// `RationalError::DivisionByZero` if `denominator` is zero.
    pub fn from_integer_ratio<N: Into<BigInt>>(numerator: N, denominator: N) -> Result<Self, RationalError> {
        Self::new(numerator.into(), denominator.into())
    }

    /// Divide by `rhs`, without reducing the result.
    ///
    /// # Errors
    ///
    /// `RationalError::DivisionByZero` if `rhs` is zero.
    pub fn divide(&self, rhs: &Self) -> Result<Self, RationalError> {
        if rhs.numerator.is_zero() {
            debug!("Rejected division of {:?} by zero valued {:?}", self, rhs);
            return Err(RationalError::DivisionByZero);
        }

        Ok(Self {
            numerator: &self.numerator * &rhs.denominator,
            denominator: &self.denominator * &rhs.numerator,
        })
    }

    /// Unary plus.
    pub fn identity(&self) -> Self {
        self.clone()
    }
}

impl Rational for Big {
    type Numerator = BigInt;
    type Denominator = BigInt;

    fn numerator(&self) -> &Self::Numerator {
        &self.numerator
    }

    fn denominator(&self) -> &Self::Denominator {
        &self.denominator
    }
}

mod compare {
    use super::*;

    impl PartialEq for Big {
        fn eq(&self, other: &Self) -> bool {
            let (left, right) = (self.canonicalize(), other.canonicalize());
            left.numerator == right.numerator && left.denominator == right.denominator
        }
    }

    impl Eq for Big {}

    impl Hash for Big {
        fn hash<H: Hasher>(&self, state: &mut H) {
            let canonical = self.canonicalize();
            canonical.numerator.hash(state);
            canonical.denominator.hash(state);
        }
    }

    impl PartialOrd for Big {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Big {
        fn cmp(&self, other: &Self) -> Ordering {
            // Cross multiplication is only valid with positive denominators
            let (left, right) = (self.canonicalize(), other.canonicalize());
            (&left.numerator * &right.denominator).cmp(&(&right.numerator * &left.denominator))
        }
    }
}

mod field {
    use super::*;

    /// Implement the by value variants of a binary operator in terms of the by reference one.
    macro_rules! forward_binary {
        ($trait_name:ident, $method:ident) => {
            impl $trait_name<Big> for Big {
                type Output = Big;

                fn $method(self, rhs: Big) -> Self::Output {
                    $trait_name::$method(&self, &rhs)
                }
            }

            impl $trait_name<&Big> for Big {
                type Output = Big;

                fn $method(self, rhs: &Big) -> Self::Output {
                    $trait_name::$method(&self, rhs)
                }
            }

            impl $trait_name<Big> for &Big {
                type Output = Big;

                fn $method(self, rhs: Big) -> Self::Output {
                    $trait_name::$method(self, &rhs)
                }
            }
        };
    }

    mod add {
        use super::*;

        impl Add<&Big> for &Big {
            type Output = Big;

            fn add(self, rhs: &Big) -> Self::Output {
                Big {
                    numerator: &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
                    denominator: &self.denominator * &rhs.denominator,
                }
            }
        }

        forward_binary!(Add, add);
    }

    mod sub {
        use super::*;

        impl Sub<&Big> for &Big {
            type Output = Big;

            fn sub(self, rhs: &Big) -> Self::Output {
                Big {
                    numerator: &self.numerator * &rhs.denominator - &rhs.numerator * &self.denominator,
                    denominator: &self.denominator * &rhs.denominator,
                }
            }
        }

        forward_binary!(Sub, sub);
    }

    mod mul {
        use super::*;

        impl Mul<&Big> for &Big {
            type Output = Big;

            fn mul(self, rhs: &Big) -> Self::Output {
                Big {
                    numerator: &self.numerator * &rhs.numerator,
                    denominator: &self.denominator * &rhs.denominator,
                }
            }
        }

        forward_binary!(Mul, mul);
    }

    mod neg {
        use super::*;

        impl Neg for Big {
            type Output = Big;

            fn neg(self) -> Self::Output {
                Big {
                    numerator: -self.numerator,
                    denominator: self.denominator,
                }
            }
        }

        impl Neg for &Big {
            type Output = Big;

            fn neg(self) -> Self::Output {
                -self.clone()
            }
        }
    }

    mod identities {
        use super::*;

        impl Zero for Big {
            fn zero() -> Self {
                Self {
                    numerator: BigInt::zero(),
                    denominator: BigInt::one(),
                }
            }

            fn is_zero(&self) -> bool {
                self.numerator.is_zero()
            }
        }

        impl One for Big {
            fn one() -> Self {
                Self {
                    numerator: BigInt::one(),
                    denominator: BigInt::one(),
                }
            }

            fn is_one(&self) -> bool {
                self.numerator == self.denominator
            }
        }
    }

    mod fold {
        use super::*;

        impl Sum for Big {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::zero(), |total, value| total + value)
            }
        }

        impl<'a> Sum<&'a Big> for Big {
            fn sum<I: Iterator<Item = &'a Big>>(iter: I) -> Self {
                iter.fold(Self::zero(), |total, value| total + value)
            }
        }

        impl Product for Big {
            fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::one(), |total, value| total * value)
            }
        }

        impl<'a> Product<&'a Big> for Big {
            fn product<I: Iterator<Item = &'a Big>>(iter: I) -> Self {
                iter.fold(Self::one(), |total, value| total * value)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use num::{BigInt, One, Zero};

    use crate::data::number_types::rational::Rational;
    use crate::error::RationalError;
    use crate::{RationalBig, RB};

    #[test]
    fn construction() {
        let value = RationalBig::new(BigInt::from(2), BigInt::from(-4)).unwrap();
        assert_eq!(value.numerator(), &BigInt::from(2));
        assert_eq!(value.denominator(), &BigInt::from(-4));

        assert_eq!(
            RationalBig::new(BigInt::from(1), BigInt::zero()),
            Err(RationalError::DivisionByZero),
        );
        assert_eq!(
            RationalBig::from_integer_ratio(0_u8, 0_u8),
            Err(RationalError::DivisionByZero),
        );
    }

    #[test]
    fn arithmetic_is_not_reduced() {
        let sum = RB!(1, 2) + RB!(1, 2);
        assert_eq!(sum.numerator(), &BigInt::from(4));
        assert_eq!(sum.denominator(), &BigInt::from(4));
        assert_eq!(sum, RB!(1));

        let quotient = RB!(2, 4).divide(&RB!(-1, 3)).unwrap();
        assert_eq!(quotient.numerator(), &BigInt::from(6));
        assert_eq!(quotient.denominator(), &BigInt::from(-4));
        assert_eq!(quotient, RB!(-3, 2));
    }

    #[test]
    fn by_reference() {
        let (a, b) = (RB!(1, 2), RB!(1, 3));
        assert_eq!(&a + &b, RB!(5, 6));
        assert_eq!(&a - b.clone(), RB!(1, 6));
        assert_eq!(a.clone() * &b, RB!(1, 6));
        assert_eq!(-&a, RB!(-1, 2));
        assert_eq!(a.identity(), a);
    }

    #[test]
    fn divide_by_zero() {
        assert_eq!(RB!(1, 2).divide(&RB!(0, 5)), Err(RationalError::DivisionByZero));
        assert_eq!(RB!(0).divide(&RB!(0, -1)), Err(RationalError::DivisionByZero));
        assert_eq!(RB!(0).divide(&RB!(7, -1)), Ok(RB!(0)));
    }

    #[test]
    fn identities() {
        assert!(RB!(0, -7).is_zero());
        assert!(RB!(-7, -7).is_one());
        assert!(!RB!(7, -7).is_one());
        assert_eq!(RationalBig::zero(), RB!(0, 3));
        assert_eq!(RationalBig::one(), RB!(3, 3));
    }

    #[test]
    fn sum_and_product() {
        let values = vec![RB!(1, 2), RB!(1, 3), RB!(1, 6)];
        assert_eq!(values.iter().sum::<RationalBig>(), RB!(1));
        assert_eq!(values.iter().product::<RationalBig>(), RB!(1, 36));
        assert_eq!(values.into_iter().sum::<RationalBig>(), RB!(1));
        assert_eq!(Vec::<RationalBig>::new().into_iter().product::<RationalBig>(), RB!(1));
    }

    #[test]
    fn ordering_with_negative_denominators() {
        assert!(RB!(1, -2) < RB!(1, 3));
        assert!(RB!(-1, -2) > RB!(1, 3));
        assert!(RB!(1, -2) < RB!(-1, 3));
        assert!(RB!(3, -4) < RB!(-2, 4));
    }
}
