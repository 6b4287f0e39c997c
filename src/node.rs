/// Arena record for the singly linked list: forward link only.
#[derive(Debug)]
pub(crate) struct SinglyNode<T> {
    pub(crate) value: T,
    pub(crate) next: Option<usize>,
}

/// Arena record for the doubly and circular lists.
///
/// The arena owns every node; `prev` and `next` are plain indices, so the
/// circular variant's ring carries no ownership cycle. `prev` is a non-owning
/// back-reference and must mirror the owning `next` direction after every
/// mutation.
#[derive(Debug)]
pub(crate) struct LinkNode<T> {
    pub(crate) value: T,
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
}
