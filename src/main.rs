fn main() {
    scroll_shooter::game::run();
}
