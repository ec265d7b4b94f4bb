use std::fmt::{Display, Write};

use proptest::prelude::*;

use crate::node::Node;

const KEY_MAX: usize = 20;

/// Generate arbitrary keys with values from [0..[`KEY_MAX`]).
///
/// The small domain encourages collisions between operations.
pub(crate) fn arbitrary_key() -> impl Strategy<Value = usize> {
    0..KEY_MAX
}

/// Produce every ordering of `values`.
pub(crate) fn permutations<T>(values: &[T]) -> Vec<Vec<T>>
where
    T: Copy,
{
    let mut scratch = values.to_vec();
    let mut out = Vec::new();
    permute(&mut scratch, 0, &mut out);
    out
}

fn permute<T>(values: &mut Vec<T>, k: usize, out: &mut Vec<Vec<T>>)
where
    T: Copy,
{
    if k == values.len() {
        out.push(values.clone());
        return;
    }

    for i in k..values.len() {
        values.swap(k, i);
        permute(values, k + 1, out);
        values.swap(k, i);
    }
}

#[allow(unused)]
pub(crate) fn print_dot<K, V>(n: &Node<K, V>) -> String
where
    K: Display + Ord,
    V: Display,
{
    let mut buf = String::new();

    writeln!(buf, "digraph {{");
    writeln!(buf, r#"bgcolor = "transparent";"#);
    writeln!(
        buf,
        r#"node [shape = record; style = filled; fontcolor = orange4; fillcolor = white;];"#
    );
    recurse(n, &mut buf);
    writeln!(buf, "}}");

    buf
}

#[allow(unused)]
fn recurse<K, V, W>(n: &Node<K, V>, buf: &mut W)
where
    W: std::fmt::Write,
    K: Display + Ord,
    V: Display,
{
    writeln!(
        buf,
        r#""{}" [label="{} | {} | b={}"];"#,
        n.key(),
        n.key(),
        n.value(),
        n.balance(),
    )
    .unwrap();

    for v in [n.left(), n.right()] {
        match v {
            Some(v) => {
                writeln!(
                    buf,
                    "\"{}\" -> \"{}\" [color = \"orange1\";];",
                    n.key(),
                    v.key()
                )
                .unwrap();
                recurse(v, buf);
            }
            None => {
                writeln!(buf, "\"null_{}\" [shape=point,style=invis];", n.key()).unwrap();
                writeln!(
                    buf,
                    "\"{}\" -> \"null_{}\" [style=invis];",
                    n.key(),
                    n.key()
                )
                .unwrap();
            }
        };
    }
}
