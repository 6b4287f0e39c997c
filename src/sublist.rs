use crate::handle::Handle;
use crate::singly::SinglyList;

/// Does `main` contain `sub` as a contiguous run of equal values?
///
/// An empty `sub` is contained in anything; a non-empty `sub` is never
/// contained in an empty `main`. Otherwise both lists are walked in lockstep
/// from every starting node of `main` until `sub` runs out (found) or the
/// values diverge. O(n·m), no mutation of either list.
pub fn contains_sublist<T: PartialEq>(main: &SinglyList<T>, sub: &SinglyList<T>) -> bool {
    if sub.is_empty() {
        return true;
    }
    if main.is_empty() {
        return false;
    }

    let mut start = main.head();
    while let Some(s) = start {
        if matches_from(main, sub, s) {
            return true;
        }
        start = main.next(s);
    }
    false
}

fn matches_from<T: PartialEq>(main: &SinglyList<T>, sub: &SinglyList<T>, start: Handle) -> bool {
    let mut m = Some(start);
    let mut q = sub.head();
    while let (Some(mh), Some(qh)) = (m, q) {
        if main.value(mh) != sub.value(qh) {
            return false;
        }
        m = main.next(mh);
        q = sub.next(qh);
    }
    // Sub exhausted means every value matched; main exhausted first is a miss.
    q.is_none()
}
