//! # Interactions with fixed size integers
use std::convert::From;
use std::ops::{Add, Mul};

use num::{BigInt, One};

use super::Big;

impl From<BigInt> for Big {
    fn from(value: BigInt) -> Self {
        Self {
            numerator: value,
            denominator: One::one(),
        }
    }
}

impl From<&BigInt> for Big {
    fn from(value: &BigInt) -> Self {
        Self::from(value.clone())
    }
}

macro_rules! define_interactions {
    ($t:ident) => {
        mod $t {
            use super::*;

            mod creation {
                use super::*;

                impl From<$t> for Big {
                    fn from(value: $t) -> Self {
                        Self::from(BigInt::from(value))
                    }
                }

                impl From<&$t> for Big {
                    fn from(value: &$t) -> Self {
                        Self::from(*value)
                    }
                }
            }

            mod compare {
                use super::*;

                impl PartialEq<$t> for Big {
                    fn eq(&self, other: &$t) -> bool {
                        let canonical = self.canonicalize();
                        canonical.denominator.is_one() && canonical.numerator == BigInt::from(*other)
                    }
                }
            }

            mod field {
                use super::*;

                mod add {
                    use super::*;

                    impl Add<&$t> for Big {
                        type Output = Self;

                        fn add(self, rhs: &$t) -> Self::Output {
                            let numerator = self.numerator + &self.denominator * BigInt::from(*rhs);
                            Self {
                                numerator,
                                denominator: self.denominator,
                            }
                        }
                    }

                    impl Add<&$t> for &Big {
                        type Output = Big;

                        fn add(self, rhs: &$t) -> Self::Output {
                            self.clone().add(rhs)
                        }
                    }
                }

                mod mul {
                    use super::*;

                    impl Mul<&$t> for Big {
                        type Output = Big;

                        fn mul(self, rhs: &$t) -> Self::Output {
                            Self {
                                numerator: self.numerator * BigInt::from(*rhs),
                                denominator: self.denominator,
                            }
                        }
                    }

                    impl Mul<&$t> for &Big {
                        type Output = Big;

                        fn mul(self, rhs: &$t) -> Self::Output {
                            self.clone().mul(rhs)
                        }
                    }
                }
            }
        }
    }
}

define_interactions!(i8);
define_interactions!(i16);
define_interactions!(i32);
define_interactions!(i64);
define_interactions!(i128);
define_interactions!(isize);
define_interactions!(u8);
define_interactions!(u16);
define_interactions!(u32);
define_interactions!(u64);
define_interactions!(u128);
define_interactions!(usize);
