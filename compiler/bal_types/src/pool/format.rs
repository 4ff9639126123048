//! Type formatting for diagnostics.

#![allow(clippy::format_push_string)]

use bal_ir::StringLookup;

use crate::{Idx, Pool, Tag};

impl Pool {
    /// Render a type the way it is written in source.
    pub fn format_type(&self, idx: Idx, names: &impl StringLookup) -> String {
        let mut buf = String::new();
        self.format_type_into(idx, names, &mut buf);
        buf
    }

    pub fn format_type_into(&self, idx: Idx, names: &impl StringLookup, buf: &mut String) {
        if !self.contains(idx) {
            buf.push_str("<invalid>");
            return;
        }
        match self.tag(idx) {
            Tag::Nil => buf.push_str("()"),
            tag if tag.is_builtin() => buf.push_str(tag.name()),

            Tag::Array => {
                let elem = self.constraint(idx);
                let wrap = self.is_union(elem);
                if wrap {
                    buf.push('(');
                }
                self.format_type_into(elem, names, buf);
                if wrap {
                    buf.push(')');
                }
                buf.push_str("[]");
            }
            tag if tag.is_container() => {
                buf.push_str(tag.name());
                let constraint = self.constraint(idx);
                if constraint != Idx::ANY {
                    buf.push('<');
                    self.format_type_into(constraint, names, buf);
                    buf.push('>');
                }
            }

            Tag::Invokable => {
                buf.push_str("function (");
                self.format_list(&self.params(idx), names, ", ", buf);
                buf.push(')');
                let ret = self.return_type(idx);
                if ret != Idx::NIL {
                    buf.push_str(" returns (");
                    self.format_type_into(ret, names, buf);
                    buf.push(')');
                }
            }
            Tag::Tuple => {
                buf.push('(');
                self.format_list(&self.tuple_elems(idx), names, ", ", buf);
                buf.push(')');
            }
            Tag::Union => match self.type_name(idx) {
                Some(name) => buf.push_str(names.lookup(name)),
                None => self.format_list(self.union_members(idx), names, "|", buf),
            },

            _ => match self.type_name(idx) {
                Some(name) => buf.push_str(names.lookup(name)),
                None => buf.push_str(idx.display_name()),
            },
        }
    }

    fn format_list(&self, list: &[Idx], names: &impl StringLookup, sep: &str, buf: &mut String) {
        for (i, &ty) in list.iter().enumerate() {
            if i > 0 {
                buf.push_str(sep);
            }
            self.format_type_into(ty, names, buf);
        }
    }
}
