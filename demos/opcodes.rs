use gestalt::SequenceMatcher;

fn main() {
    let old = "qabxcd".chars().collect::<Vec<_>>();
    let new = "abycdf".chars().collect::<Vec<_>>();
    let matcher = SequenceMatcher::new(&old, &new);

    for op in matcher.get_opcodes() {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        println!(
            "{:>7} a[{}:{}] ({}) b[{}:{}] ({})",
            tag.as_str(),
            old_range.start,
            old_range.end,
            old[old_range.clone()].iter().collect::<String>(),
            new_range.start,
            new_range.end,
            new[new_range.clone()].iter().collect::<String>(),
        );
    }
    println!("ratio: {:.3}", matcher.ratio());
}
