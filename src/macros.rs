//! Crate-local macros for operator and comparison impls.
//!
//! All macros implement for a type generic over `F: Float`, so the type
//! arguments passed in should refer to the parameter as `F`.

macro_rules! impl_binop {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, $to:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<'a, F: $crate::num::Float> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<F: $crate::num::Float> ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(self, &rhs)
            }
        }

        impl<'a, F: $crate::num::Float> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, rhs)
            }
        }

        impl<F: $crate::num::Float> ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, &rhs)
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl<F: $crate::num::Float> ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl<F: $crate::num::Float> ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                ::std::ops::$op::$method(&self)
            }
        }
    };
}

macro_rules! impl_binop_assign {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<F: $crate::num::Float> ::std::ops::$op<&$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<F: $crate::num::Float> ::std::ops::$op<$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                ::std::ops::$op::$method(self, &rhs);
            }
        }
    };
}

macro_rules! impl_abs_diff_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident| $body:block) => {
        impl<F: $crate::num::Float> ::approx::AbsDiffEq for $t {
            type Epsilon = F;

            fn default_epsilon() -> Self::Epsilon {
                F::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                $body
            }
        }
    };
}

macro_rules! impl_relative_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident, $arg4:ident| $body:block) => {
        impl<F: $crate::num::Float> ::approx::RelativeEq for $t {
            fn default_max_relative() -> Self::Epsilon {
                F::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                let $arg4 = max_relative;
                $body
            }
        }
    };
}

/// Implements the arithmetic operators shared by every concrete vector
/// type in terms of the [`Vector`](crate::vector::Vector) contract.
macro_rules! impl_vector_ops {
    ($t:ident) => {
        impl_binop!(Add, add, $t<F>, $t<F>, $t<F>, |a, b| {
            $crate::vector::Vector::added_vector(a, b)
        });

        impl_binop!(Sub, sub, $t<F>, $t<F>, $t<F>, |a, b| {
            $crate::vector::Vector::subbed_vector(a, b)
        });

        impl_binop!(Add, add, $t<F>, F, $t<F>, |a, b| {
            $crate::vector::Vector::added_scalar(a, *b)
        });

        impl_binop!(Sub, sub, $t<F>, F, $t<F>, |a, b| {
            $crate::vector::Vector::subbed_scalar(a, *b)
        });

        impl_binop!(Mul, mul, $t<F>, F, $t<F>, |a, b| {
            $crate::vector::Vector::multiplied_scalar(a, *b)
        });

        impl_binop!(Div, div, $t<F>, F, $t<F>, |a, b| {
            $crate::vector::Vector::divided_scalar(a, *b)
        });

        impl_binop_assign!(AddAssign, add_assign, $t<F>, $t<F>, |a, b| {
            $crate::vector::Vector::add_vector(a, b);
        });

        impl_binop_assign!(SubAssign, sub_assign, $t<F>, $t<F>, |a, b| {
            $crate::vector::Vector::sub_vector(a, b);
        });

        impl_binop_assign!(AddAssign, add_assign, $t<F>, F, |a, b| {
            $crate::vector::Vector::add_scalar(a, *b);
        });

        impl_binop_assign!(SubAssign, sub_assign, $t<F>, F, |a, b| {
            $crate::vector::Vector::sub_scalar(a, *b);
        });

        impl_binop_assign!(MulAssign, mul_assign, $t<F>, F, |a, b| {
            $crate::vector::Vector::multiply_scalar(a, *b);
        });

        impl_binop_assign!(DivAssign, div_assign, $t<F>, F, |a, b| {
            $crate::vector::Vector::divide_scalar(a, *b);
        });

        impl_unary_op!(Neg, neg, $t<F>, $t<F>, |val| {
            $crate::vector::Vector::flipped(
                val,
                <<$t<F> as $crate::vector::Vector>::Axis as $crate::axis::AxisSet>::ALL,
            )
        });

        impl_abs_diff_eq!($t<F>, |a, b, epsilon| {
            $crate::vector::axes_abs_diff_eq(a, b, epsilon)
        });

        impl_relative_eq!($t<F>, |a, b, epsilon, max_relative| {
            $crate::vector::axes_relative_eq(a, b, epsilon, max_relative)
        });
    };
}
