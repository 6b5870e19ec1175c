use fuzz_intmap::Input;

fn main() {
    afl::fuzz!(|data: Input| data.run());
}
