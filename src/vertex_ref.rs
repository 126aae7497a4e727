use derivative::Derivative;

/// A vertex produced by an iterator: its index and a reference to its
/// payload.
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Copy(bound = ""),
    Debug(bound = "V: std::fmt::Debug"),
    PartialEq(bound = "V: PartialEq")
)]
pub struct VertexRef<'g, V> {
    pub id: usize,
    pub data: &'g V,
}

impl<'g, V> VertexRef<'g, V> {
    pub(crate) fn new(id: usize, data: &'g V) -> Self {
        Self { id, data }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn data(&self) -> &'g V {
        self.data
    }
}
