//! Demo: link 10 -> 20 -> 30 by hand, then print and sum the list.

use intlist_core::{IntList, Node};

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();

    let third = Box::new(Node::new(30));
    let second = Box::new(Node::with_next(20, Some(third)));
    let front = Box::new(Node::with_next(10, Some(second)));
    let list = IntList::from_head(Some(front));
    log::debug!("linked {} nodes", list.len());

    println!("booyah");
    list.print()?;
    println!("{}", list.sum());

    Ok(())
}
