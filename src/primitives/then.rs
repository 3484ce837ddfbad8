/// Builder-style in-place initialization.
///
/// ```ignore
/// let props = LabelProps::default().then(|p| {
///     p.text = "Sign in".into();
///     p.color = Some(Rgba::hex(0x007AFF));
/// });
/// ```
pub trait Then: Sized {
    fn then(mut self, f: impl FnOnce(&mut Self)) -> Self {
        f(&mut self);
        self
    }
}

impl<T: Sized> Then for T {}
