use smolfield::Animator;

fn main() {
    if let Err(e) = Animator::new().run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
