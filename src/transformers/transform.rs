//! Transform trait.

/// Text transformation.
pub trait Transform {
    /// Takes ownership of the text and returns the transformed one.
    fn transform_own(&self, text: String) -> String;
}
