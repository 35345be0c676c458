//! Abstractions for pagination.

use std::fmt;

/// Generic pagination connection.
#[derive(Clone, Debug)]
pub struct Connection<C, I> {
    /// [`Edge`]s in this [`Connection`].
    pub edges: Vec<Edge<C, I>>,

    /// [`Kind`] of this [`Connection`].
    pub kind: Kind,

    /// Indicator whether this [`Connection`] has more nodes.
    pub has_more: bool,
}

/// A page in a [`Connection`].
pub type Page<C, I> = Connection<C, I>;

impl<C, I> Connection<C, I> {
    /// Creates a new [`Connection`] from the provided [`Edge`]s.
    #[must_use]
    pub fn new(
        args: &Arguments<C>,
        edges: impl IntoIterator<Item = impl Into<Edge<C, I>>>,
        has_more: bool,
    ) -> Self {
        Self {
            edges: edges.into_iter().map(Into::into).collect::<Vec<_>>(),
            kind: args.kind(),
            has_more,
        }
    }

    /// Returns [`PageInfo`] of this [`Connection`].
    #[must_use]
    pub fn page_info(&self) -> PageInfo<C>
    where
        C: Clone,
    {
        PageInfo {
            end_cursor: self.edges.last().map(|e| e.cursor.clone()),
            has_next_page: self.has_more && self.kind.is_forward(),
            has_previous_page: self.has_more && self.kind.is_backward(),
        }
    }
}

/// Information about a page in a [`Connection`].
#[derive(Clone, Copy, Debug)]
pub struct PageInfo<C> {
    /// Last cursor on this page.
    pub end_cursor: Option<C>,

    /// Indicator whether [`Connection`] has a next page.
    pub has_next_page: bool,

    /// Indicator whether [`Connection`] has a previous page.
    pub has_previous_page: bool,
}

/// An edge in a [`Connection`].
#[derive(Clone, Copy, Debug)]
pub struct Edge<C, I> {
    /// Cursor of this [`Edge`].
    pub cursor: C,

    /// Node of this [`Edge`].
    pub node: I,
}

impl<C, I> From<(C, I)> for Edge<C, I> {
    fn from((cursor, node): (C, I)) -> Self {
        Self { cursor, node }
    }
}

/// Pagination arguments.
#[derive(Clone, Copy, Debug)]
pub enum Arguments<C> {
    /// Forward pagination.
    Forward {
        /// Number of items to return.
        first: usize,

        /// Cursor after which to return items.
        after: Option<C>,

        /// Indicator whether the `after` cursor should be included in the
        /// result.
        including: bool,
    },

    /// Backward pagination.
    Backward {
        /// Number of items to return.
        last: usize,

        /// Cursor before which to return items.
        before: Option<C>,

        /// Indicator whether the `before` cursor should be included in the
        /// result.
        including: bool,
    },
}

impl<C> Arguments<C> {
    /// Creates a new [`Arguments`].
    pub fn new<Num>(
        first: Option<Num>,
        after: Option<C>,
        last: Option<Num>,
        before: Option<C>,
        default: Num,
    ) -> Option<Self>
    where
        C: PartialEq + fmt::Debug,
        Num: TryInto<usize> + fmt::Debug,
    {
        Some(match (first, after, last, before) {
            (None, None, None, None) => Self::Forward {
                first: default.try_into().ok()?,
                after: None,
                including: false,
            },
            (Some(first), None, None, None) => Self::Forward {
                first: first.try_into().ok()?,
                after: None,
                including: false,
            },
            (Some(first), Some(after), None, None) => Self::Forward {
                first: first.try_into().ok()?,
                after: Some(after),
                including: false,
            },
            (Some(first), Some(after), None, Some(before))
                if after == before =>
            {
                Self::Forward {
                    first: first.try_into().ok()?,
                    after: Some(after),
                    including: true,
                }
            }
            (None, None, Some(last), None) => Self::Backward {
                last: last.try_into().ok()?,
                before: None,
                including: false,
            },
            (None, None, Some(last), Some(before)) => Self::Backward {
                last: last.try_into().ok()?,
                before: Some(before),
                including: false,
            },
            (None, Some(after), Some(last), Some(before))
                if after == before =>
            {
                Self::Backward {
                    last: last.try_into().ok()?,
                    before: Some(before),
                    including: true,
                }
            }
            (None, Some(after), None, Some(before)) if after == before => {
                Self::Forward {
                    first: 1,
                    after: Some(after),
                    including: true,
                }
            }
            _ => return None,
        })
    }

    /// Returns exact cursor requested by this [`Arguments`].
    pub fn exact_cursor(&self) -> Option<&C> {
        match self {
            Self::Forward {
                first: 1,
                after,
                including: true,
            } => after.as_ref(),
            Self::Backward {
                last: 1,
                before,
                including: true,
            } => before.as_ref(),
            Self::Forward { .. } | Self::Backward { .. } => None,
        }
    }

    /// Returns cursor requested by this [`Arguments`].
    #[must_use]
    pub fn cursor(&self) -> Option<&C> {
        match self {
            Self::Forward { after, .. } => after.as_ref(),
            Self::Backward { before, .. } => before.as_ref(),
        }
    }

    /// Selects the window of `nodes` requested by this [`Arguments`].
    ///
    /// `nodes` are expected to be in their listing order, and the `cursor`
    /// function extracts a cursor out of each node. Nodes of the window keep
    /// their listing order for both forward and backward pagination.
    ///
    /// Returns the window along with the indicator whether more nodes exist
    /// in the requested direction. An empty window is returned if the
    /// requested cursor is not present in `nodes`.
    pub fn window<'n, N>(
        &self,
        nodes: &'n [N],
        cursor: impl Fn(&N) -> &C,
    ) -> (&'n [N], bool)
    where
        C: PartialEq,
    {
        let position = |c: &C| nodes.iter().position(|n| cursor(n) == c);

        match self {
            Self::Forward {
                first,
                after,
                including,
            } => {
                let start = match after {
                    None => 0,
                    Some(c) => match position(c) {
                        Some(at) if *including => at,
                        Some(at) => at + 1,
                        None => return (&[], false),
                    },
                };
                let end = start.saturating_add(*first).min(nodes.len());
                (&nodes[start..end], end < nodes.len())
            }
            Self::Backward {
                last,
                before,
                including,
            } => {
                let end = match before {
                    None => nodes.len(),
                    Some(c) => match position(c) {
                        Some(at) if *including => at + 1,
                        Some(at) => at,
                        None => return (&[], false),
                    },
                };
                let start = end.saturating_sub(*last);
                (&nodes[start..end], start > 0)
            }
        }
    }

    /// Returns [`Kind`] of pagination this [`Arguments`] requests.
    pub fn kind(&self) -> Kind {
        match *self {
            Self::Forward { including, .. } => {
                if including {
                    Kind::ForwardIncluding
                } else {
                    Kind::Forward
                }
            }
            Self::Backward { including, .. } => {
                if including {
                    Kind::BackwardIncluding
                } else {
                    Kind::Backward
                }
            }
        }
    }

    /// Returns limit requested by this [`Arguments`].
    #[must_use]
    pub fn limit(&self) -> usize {
        match *self {
            Self::Forward { first, .. } => first,
            Self::Backward { last, .. } => last,
        }
    }
}

/// Pagination selector.
#[derive(Clone, Copy, Debug)]
pub struct Selector<C, F> {
    /// Pagination [`Arguments`].
    pub arguments: Arguments<C>,

    /// Additional filter being applied to the result.
    pub filter: F,
}

/// Kind of pagination.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// Forward pagination.
    Forward,

    /// Forward pagination including the cursor.
    ForwardIncluding,

    /// Backward pagination.
    Backward,

    /// Backward pagination including the cursor.
    BackwardIncluding,
}

impl Kind {
    /// Returns whether this [`Kind`] is forward.
    #[must_use]
    pub fn is_forward(&self) -> bool {
        matches!(self, Self::Forward | Self::ForwardIncluding)
    }

    /// Returns whether this [`Kind`] is backward.
    #[must_use]
    pub fn is_backward(&self) -> bool {
        matches!(self, Self::Backward | Self::BackwardIncluding)
    }
}

/// Defines pagination types.
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_pagination {
    ($cursor:ty, $node:ty, $filter:ty) => {
        #[doc = "Edge of a [`Connection`]."]
        pub type Edge = $crate::pagination::Edge<$cursor, $node>;

        #[doc = "A [`Connection`] of [`$node`]s."]
        pub type Connection = $crate::pagination::Connection<$cursor, $node>;

        #[doc = "A [`Page`] of [`$node`]s."]
        pub type Page = $crate::pagination::Page<$cursor, $node>;

        #[doc = "An information about a [`Page`]."]
        pub type PageInfo = $crate::pagination::PageInfo<$cursor>;

        #[doc = "Arguments for selecting a [`Page`]."]
        pub type Arguments = $crate::pagination::Arguments<$cursor>;

        #[doc = "[`Page`] selector."]
        pub type Selector = $crate::pagination::Selector<$cursor, $filter>;
    };
}

#[cfg(test)]
mod spec {
    use super::{Arguments, Connection, Kind};

    const NODES: [u8; 5] = [10, 20, 30, 40, 50];

    fn window(args: &Arguments<u8>) -> (Vec<u8>, bool) {
        let (nodes, has_more) = args.window(&NODES, |n| n);
        (nodes.to_vec(), has_more)
    }

    #[test]
    fn builds_arguments() {
        let args = Arguments::<u8>::new(None, None, None, None, 10).unwrap();
        assert_eq!(args.kind(), Kind::Forward);
        assert_eq!(args.limit(), 10);

        let args = Arguments::new(None, None, Some(2), Some(30), 10).unwrap();
        assert_eq!(args.kind(), Kind::Backward);
        assert_eq!(args.cursor(), Some(&30));

        let args = Arguments::new(None, Some(30), None, Some(30), 10).unwrap();
        assert_eq!(args.kind(), Kind::ForwardIncluding);
        assert_eq!(args.exact_cursor(), Some(&30));

        assert!(
            Arguments::<u8>::new(Some(1), None, Some(1), None, 10).is_none()
        );
        assert!(Arguments::<u8>::new(Some(-1), None, None, None, 10).is_none());
    }

    #[test]
    fn forward_window() {
        let args = Arguments::new(Some(2), None, None, None, 10).unwrap();
        assert_eq!(window(&args), (vec![10, 20], true));

        let args = Arguments::new(Some(2), Some(30), None, None, 10).unwrap();
        assert_eq!(window(&args), (vec![40, 50], false));

        let args = Arguments::new(Some(10), Some(10), None, None, 10).unwrap();
        assert_eq!(window(&args), (vec![20, 30, 40, 50], false));

        let args = Arguments::new(Some(2), Some(99), None, None, 10).unwrap();
        assert_eq!(window(&args), (vec![], false));
    }

    #[test]
    fn backward_window() {
        let args = Arguments::new(None, None, Some(2), None, 10).unwrap();
        assert_eq!(window(&args), (vec![40, 50], true));

        let args = Arguments::new(None, None, Some(2), Some(30), 10).unwrap();
        assert_eq!(window(&args), (vec![10, 20], false));

        let args =
            Arguments::new(None, Some(30), Some(2), Some(30), 10).unwrap();
        assert_eq!(window(&args), (vec![20, 30], true));
    }

    #[test]
    fn page_info() {
        let args = Arguments::new(Some(2), None, None, None, 10).unwrap();
        let (nodes, has_more) = args.window(&NODES, |n| n);
        let page = Connection::<u8, u8>::new(
            &args,
            nodes.iter().map(|n| (*n, *n)),
            has_more,
        );

        let info = page.page_info();
        assert_eq!(info.end_cursor, Some(20));
        assert!(info.has_next_page);
        assert!(!info.has_previous_page);
    }
}
