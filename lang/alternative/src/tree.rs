//! Hierarchical failure records.

/// Every failure tried at a choice point.
///
/// A leaf is a single failed alternative. A node with children is a failure
/// whose later-tried alternatives also failed, one child per alternative, in
/// the order they were tried. Trees are never mutated: [`ErrorTree::appended`]
/// returns a new tree sharing structure with the old one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ErrorTree<E: Clone> {
    value: E,
    children: im::Vector<ErrorTree<E>>,
}

impl<E: Clone> ErrorTree<E> {
    pub fn leaf(value: E) -> Self {
        ErrorTree { value, children: im::Vector::new() }
    }
    pub fn new(value: E, children: impl IntoIterator<Item = ErrorTree<E>>) -> Self {
        ErrorTree { value, children: children.into_iter().collect() }
    }

    pub fn value(&self) -> &E {
        &self.value
    }
    pub fn children(&self) -> &im::Vector<ErrorTree<E>> {
        &self.children
    }
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// `self` with `child` pushed after its existing children.
    pub fn appended(&self, child: ErrorTree<E>) -> Self {
        let mut children = self.children.clone();
        children.push_back(child);
        ErrorTree { value: self.value.clone(), children }
    }

    /// Replace every recorded value, keeping the shape.
    pub fn map<F: Clone>(&self, f: &impl Fn(&E) -> F) -> ErrorTree<F> {
        ErrorTree {
            value: f(&self.value),
            children: self.children.iter().map(|child| child.map(f)).collect(),
        }
    }

    /// Number of recorded failures.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(ErrorTree::size).sum::<usize>()
    }
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(ErrorTree::depth).max().unwrap_or(0)
    }

    /// Pre-order walk over every recorded value, which is trial order.
    pub fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(&node.value)
        })
    }
}

impl<E: Clone> From<E> for ErrorTree<E> {
    fn from(value: E) -> Self {
        ErrorTree::leaf(value)
    }
}
