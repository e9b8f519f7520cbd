// Operator forwarding.
//
// Each binary operator is implemented once for `&T op &T`; these macros
// derive the owned and mixed forms plus the compound-assignment form from it.

macro_rules! forward_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<$res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                (&self).$method(&other)
            }
        }

        impl<'a> $imp<&'a $res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: &'a $res) -> $res {
                (&self).$method(other)
            }
        }

        impl<'a> $imp<$res> for &'a $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                self.$method(&other)
            }
        }
    };
}

macro_rules! forward_assign_op {
    (impl $imp:ident for $res:ty, $method:ident, $op:ident) => {
        impl $imp<$res> for $res {
            #[inline]
            fn $method(&mut self, other: $res) {
                *self = (&*self).$op(&other);
            }
        }

        impl<'a> $imp<&'a $res> for $res {
            #[inline]
            fn $method(&mut self, other: &'a $res) {
                *self = (&*self).$op(other);
            }
        }
    };
}

macro_rules! forward_shift {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<usize> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, bits: usize) -> $res {
                (&self).$method(bits)
            }
        }
    };
}

macro_rules! forward_iter_fold {
    (impl $imp:ident for $res:ty, $method:ident, $init:expr, $op:ident) => {
        impl $imp for $res {
            fn $method<I: Iterator<Item = $res>>(iter: I) -> $res {
                iter.fold($init, |acc, x| (&acc).$op(&x))
            }
        }

        impl<'a> $imp<&'a $res> for $res {
            fn $method<I: Iterator<Item = &'a $res>>(iter: I) -> $res {
                iter.fold($init, |acc, x| (&acc).$op(x))
            }
        }
    };
}
