use nunit_runner_core::{Framework, Platform};

pub fn platforms_command() {
    println!("Platforms:");
    for platform in Platform::ALL {
        println!("  {platform}");
    }
    println!("Frameworks:");
    for framework in Framework::ALL {
        println!("  {framework}");
    }
}
