use symdex::prelude::*;

// Resolves a few names against a table embedded the way generated code is.
static BASE_INDEX: [IndexNode<&str>; 3] = [
    IndexNode::new(0x835a, 0x01, 0x02, "new"),
    IndexNode::new(0x3645, 0x00, 0x00, "to_s"),
    IndexNode::new(0xb966, 0x00, 0x00, "class"),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    for name in ["new", "class", "to_s", "dup"] {
        match lookup(&BASE_INDEX, name) {
            Some(position) => println!("{name:>6} -> slot {position}"),
            None => println!("{name:>6} -> not a built-in"),
        }
    }

    let table = IndexBuilder::from_iter(&Vocabulary::builtin()).build()?;
    println!();
    print!("{}", render(&table, &Config::new())?);
    Ok(())
}
