fn main() {
    pageflow::app::run();
}
