use ape_tools::app::adb::command::DeviceRoot;
use ape_tools::app::launch::launcher_main;

fn main() {
    std::process::exit(launcher_main("ape-sdcard", DeviceRoot::Sdcard));
}
