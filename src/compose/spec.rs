//! Composition specs: ordered LEAF / GROUP entries as plain data.

/// One entry of a [`CompositionSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Attach the view directly to the current parent.
    Leaf(usize),
    /// Attach `container` to the current parent, then apply `spec` under it.
    Group {
        container: usize,
        spec: CompositionSpec,
    },
}

impl Entry {
    pub fn leaf(view: usize) -> Self {
        Self::Leaf(view)
    }

    pub fn group(container: usize, spec: impl Into<CompositionSpec>) -> Self {
        Self::Group {
            container,
            spec: spec.into(),
        }
    }

    /// The view this entry attaches to the current parent.
    pub fn view(&self) -> usize {
        match self {
            Self::Leaf(view) => *view,
            Self::Group { container, .. } => *container,
        }
    }
}

/// Ordered declarative description of the children to attach to a view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompositionSpec {
    entries: Vec<Entry>,
}

impl CompositionSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Append a LEAF entry.
    pub fn leaf(mut self, view: usize) -> Self {
        self.entries.push(Entry::Leaf(view));
        self
    }

    /// Append a GROUP entry.
    pub fn group(mut self, container: usize, spec: impl Into<CompositionSpec>) -> Self {
        self.entries.push(Entry::group(container, spec));
        self
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Every view the spec attaches, in pre-order.
    pub fn views(&self) -> Vec<usize> {
        let mut out = Vec::new();
        collect_views(self, &mut out);
        out
    }
}

fn collect_views(spec: &CompositionSpec, out: &mut Vec<usize>) {
    for entry in &spec.entries {
        out.push(entry.view());
        if let Entry::Group { spec, .. } = entry {
            collect_views(spec, out);
        }
    }
}

impl From<Vec<Entry>> for CompositionSpec {
    fn from(entries: Vec<Entry>) -> Self {
        Self::from_entries(entries)
    }
}

/// A bare list of views is a LEAF-only spec.
impl From<Vec<usize>> for CompositionSpec {
    fn from(views: Vec<usize>) -> Self {
        views.into_iter().map(Entry::Leaf).collect()
    }
}

impl FromIterator<Entry> for CompositionSpec {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().collect())
    }
}

/// Build a [`CompositionSpec`] literal.
///
/// `view` is a LEAF, `container => [ ... ]` is a GROUP.
///
/// ```ignore
/// let spec = subviews![title, card => [avatar, name], footer];
/// ```
#[macro_export]
macro_rules! subviews {
    (@acc [$($out:expr,)*]) => {
        $crate::compose::CompositionSpec::from_entries(vec![$($out,)*])
    };
    (@acc [$($out:expr,)*] $container:expr => [$($inner:tt)*] $(, $($rest:tt)*)?) => {
        $crate::subviews!(
            @acc [$($out,)* $crate::compose::Entry::group($container, $crate::subviews!($($inner)*)),]
            $($($rest)*)?
        )
    };
    (@acc [$($out:expr,)*] $leaf:expr $(, $($rest:tt)*)?) => {
        $crate::subviews!(@acc [$($out,)* $crate::compose::Entry::leaf($leaf),] $($($rest)*)?)
    };
    ($($tokens:tt)*) => {
        $crate::subviews!(@acc [] $($tokens)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_methods_keep_order() {
        let spec = CompositionSpec::new()
            .leaf(1)
            .group(2, vec![3, 4])
            .leaf(5);

        assert_eq!(spec.len(), 3);
        assert_eq!(spec.views(), vec![1, 2, 3, 4, 5]);
        assert_eq!(spec.entries()[1].view(), 2);
    }

    #[test]
    fn test_macro_matches_builder() {
        let (x, y, a, b, z) = (10, 11, 12, 13, 14);
        let from_macro = subviews![x, y => [a, b], z];
        let by_hand = CompositionSpec::new()
            .leaf(x)
            .group(y, CompositionSpec::new().leaf(a).leaf(b))
            .leaf(z);
        assert_eq!(from_macro, by_hand);
    }

    #[test]
    fn test_macro_nested_and_empty() {
        let spec = subviews![1 => [2 => [3], 4], 5,];
        assert_eq!(spec.views(), vec![1, 2, 3, 4, 5]);

        let empty = subviews![];
        assert!(empty.is_empty());

        let empty_group = subviews![7 => []];
        assert_eq!(empty_group.views(), vec![7]);
    }
}
