use core::pin::Pin;

pub(crate) fn iter_pin_mut<T>(slice: Pin<&mut [T]>) -> impl Iterator<Item = Pin<&mut T>> {
    // SAFETY: `std` _could_ make this unsound if it were to decide Pin's
    // invariants aren't required to transmit through slices. Otherwise this has
    // the same safety as a normal field pin projection.
    unsafe { slice.get_unchecked_mut() }
        .iter_mut()
        .map(|t| unsafe { Pin::new_unchecked(t) })
}

pub(crate) fn iter_pin_mut_vec<T>(vec: Pin<&mut Vec<T>>) -> impl Iterator<Item = Pin<&mut T>> {
    // SAFETY: the vec is never grown or shrunk once it's been pinned, so the
    // items on the heap never move.
    iter_pin_mut(unsafe { vec.map_unchecked_mut(|vec| vec.as_mut_slice()) })
}

pub(crate) fn iter_pin_mut_array<T, const N: usize>(
    array: Pin<&mut [T; N]>,
) -> impl Iterator<Item = Pin<&mut T>> {
    // SAFETY: viewing an array as a slice doesn't move any of its items.
    iter_pin_mut(unsafe { array.map_unchecked_mut(|array| array.as_mut_slice()) })
}
