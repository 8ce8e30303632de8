use super::Subscription;
use std::sync::Arc;

/// Callback fired when an atom's value changes. The new value is not passed;
/// listeners read it back through [`Atom::get`] if they need it.
pub type ChangeListener = Arc<dyn Fn() + Send + Sync>;

/// The capability a controller needs from a store: read the current value and
/// be told when it changes.
pub trait Atom: Send + Sync {
    /// Type of the value held by the atom.
    type Value;

    /// Current value of the atom.
    fn get(&self) -> Self::Value;

    /// Register `on_change` to run after every change, until the returned
    /// guard is released.
    fn listen(&self, on_change: ChangeListener) -> Subscription;
}

impl<A: Atom + ?Sized> Atom for Arc<A> {
    type Value = A::Value;

    fn get(&self) -> Self::Value {
        (**self).get()
    }

    fn listen(&self, on_change: ChangeListener) -> Subscription {
        (**self).listen(on_change)
    }
}

impl<A: Atom + ?Sized> Atom for &A {
    type Value = A::Value;

    fn get(&self) -> Self::Value {
        (**self).get()
    }

    fn listen(&self, on_change: ChangeListener) -> Subscription {
        (**self).listen(on_change)
    }
}

/// An ordered collection of atoms watched together.
///
/// Implemented for `()`, tuples of up to eight atoms, `Vec<A>`, `[A; N]` and
/// `Arc<L>`. Tuples may mix value types; `values` returns a tuple in the
/// same order.
pub trait StoreList: Send + Sync {
    /// The current values, one per atom, in list order.
    type Values;

    /// Number of atoms in the list.
    fn len(&self) -> usize;

    /// Whether the list holds no atoms.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Listen to every atom in list order, returning one guard per atom.
    fn listen_all(&self, on_change: &ChangeListener) -> Vec<Subscription>;

    /// Read every atom in list order.
    fn values(&self) -> Self::Values;
}

impl StoreList for () {
    type Values = ();

    fn len(&self) -> usize {
        0
    }

    fn listen_all(&self, _on_change: &ChangeListener) -> Vec<Subscription> {
        Vec::new()
    }

    fn values(&self) -> Self::Values {}
}

impl<A: Atom> StoreList for Vec<A> {
    type Values = Vec<A::Value>;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn listen_all(&self, on_change: &ChangeListener) -> Vec<Subscription> {
        self.iter()
            .map(|atom| atom.listen(Arc::clone(on_change)))
            .collect()
    }

    fn values(&self) -> Self::Values {
        self.iter().map(Atom::get).collect()
    }
}

impl<A: Atom, const N: usize> StoreList for [A; N] {
    type Values = [A::Value; N];

    fn len(&self) -> usize {
        N
    }

    fn listen_all(&self, on_change: &ChangeListener) -> Vec<Subscription> {
        self.iter()
            .map(|atom| atom.listen(Arc::clone(on_change)))
            .collect()
    }

    fn values(&self) -> Self::Values {
        std::array::from_fn(|index| self[index].get())
    }
}

impl<L: StoreList + ?Sized> StoreList for Arc<L> {
    type Values = L::Values;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn listen_all(&self, on_change: &ChangeListener) -> Vec<Subscription> {
        (**self).listen_all(on_change)
    }

    fn values(&self) -> Self::Values {
        (**self).values()
    }
}

macro_rules! impl_store_list_for_tuple {
    ($len:expr; $($name:ident => $index:tt),+) => {
        impl<$($name: Atom),+> StoreList for ($($name,)+) {
            type Values = ($($name::Value,)+);

            fn len(&self) -> usize {
                $len
            }

            fn listen_all(&self, on_change: &ChangeListener) -> Vec<Subscription> {
                let mut subscriptions = Vec::with_capacity($len);
                $(subscriptions.push(self.$index.listen(Arc::clone(on_change)));)+
                subscriptions
            }

            fn values(&self) -> Self::Values {
                ($(self.$index.get(),)+)
            }
        }
    };
}

impl_store_list_for_tuple!(1; A => 0);
impl_store_list_for_tuple!(2; A => 0, B => 1);
impl_store_list_for_tuple!(3; A => 0, B => 1, C => 2);
impl_store_list_for_tuple!(4; A => 0, B => 1, C => 2, D => 3);
impl_store_list_for_tuple!(5; A => 0, B => 1, C => 2, D => 3, E => 4);
impl_store_list_for_tuple!(6; A => 0, B => 1, C => 2, D => 3, E => 4, F => 5);
impl_store_list_for_tuple!(7; A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6);
impl_store_list_for_tuple!(8; A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7);
