//! Demo: link 42 -> 9999 by hand, then print and sum the list.

use intlist_core::{IntList, Node};

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();

    let second = Box::new(Node::new(9999));
    let front = Box::new(Node::with_next(42, Some(second)));
    let list = IntList::from_head(Some(front));

    list.print()?;
    println!("{}", list.sum());

    Ok(())
}
