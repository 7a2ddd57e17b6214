//! The formatter traits and their error tree instances.

use crate::{conf::Conf, tree::ErrorTree};
use pretty::RcDoc;
use std::fmt::Display;

#[impl_tools::autoimpl(for<T: trait + ?Sized> &T, &mut T, Box<T>, std::rc::Rc<T>, std::sync::Arc<T>)]
pub trait Ugly<'a, Fmter> {
    fn ugly(&self, f: &'a Fmter) -> String;
}

#[impl_tools::autoimpl(for<T: trait + ?Sized> &T, &mut T, Box<T>, std::rc::Rc<T>, std::sync::Arc<T>)]
pub trait Pretty<'a, Fmter> {
    fn pretty(&self, f: &'a Fmter) -> RcDoc<'a>;
}

pub struct Formatter {
    pub indent: isize,
    pub width: usize,
}

impl Formatter {
    pub fn new(conf: &Conf) -> Self {
        Formatter { indent: conf.indent, width: conf.render_width }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter::new(&Conf::default())
    }
}

/* ---------------------------------- Ugly ---------------------------------- */

impl<'a, E: Clone + Display> Ugly<'a, Formatter> for ErrorTree<E> {
    fn ugly(&self, f: &'a Formatter) -> String {
        if self.is_leaf() {
            return format!("{}", self.value());
        }
        let children: Vec<_> = self.children().iter().map(|child| child.ugly(f)).collect();
        format!("{} [{}]", self.value(), children.join(", "))
    }
}

/* --------------------------------- Pretty --------------------------------- */

impl<'a, E: Clone + Display> Pretty<'a, Formatter> for ErrorTree<E> {
    fn pretty(&self, f: &'a Formatter) -> RcDoc<'a> {
        let children = RcDoc::concat(
            self.children().iter().map(|child| RcDoc::hardline().append(child.pretty(f))),
        );
        RcDoc::text(format!("{}", self.value())).append(children.nest(f.indent))
    }
}

impl<E: Clone + Display> ErrorTree<E> {
    pub fn render(&self, conf: &Conf) -> String {
        let fmt = Formatter::new(conf);
        let mut buf = String::new();
        // writing into a `String` never fails
        let _ = self.pretty(&fmt).render_fmt(fmt.width, &mut buf);
        buf
    }
}

impl<E: Clone + Display> Display for ErrorTree<E> {
    fn fmt(&self, out: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fmt = Formatter::default();
        self.pretty(&fmt).render_fmt(fmt.width, out)
    }
}
