fn main() {
    harvest_game::game::run();
}
