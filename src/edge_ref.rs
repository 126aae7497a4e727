use derivative::Derivative;

/// An edge produced by an iterator: its endpoints and a reference to its
/// label.
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Copy(bound = ""),
    Debug(bound = "E: std::fmt::Debug"),
    PartialEq(bound = "E: PartialEq")
)]
pub struct EdgeRef<'g, E> {
    pub from: usize,
    pub into: usize,
    pub label: &'g E,
}

impl<'g, E> EdgeRef<'g, E> {
    pub(crate) fn new(from: usize, into: usize, label: &'g E) -> Self {
        Self { from, into, label }
    }

    /// Gets the source vertex index.
    pub fn source(&self) -> usize {
        self.from
    }

    /// Gets the destination vertex index.
    pub fn target(&self) -> usize {
        self.into
    }

    pub fn label(&self) -> &'g E {
        self.label
    }
}
