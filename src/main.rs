fn main() {
    breakout::game::run();
}
