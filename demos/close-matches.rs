use std::process::exit;

use gestalt::text::get_close_matches;

fn main() {
    let args: Vec<_> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        eprintln!("usage: close-matches [word] [candidates...]");
        exit(1);
    }

    let candidates = args[1..].iter().map(|x| x.as_str()).collect::<Vec<_>>();
    match get_close_matches(&args[0], &candidates, 3, 0.6) {
        Ok(matches) => {
            for word in matches {
                println!("{}", word);
            }
        }
        Err(err) => {
            eprintln!("error: {}", err);
            exit(1);
        }
    }
}
