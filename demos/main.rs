// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_term_fx::{CapabilityTier, RgbColor, StyleSpec, clear_fx, global_capability,
                   hsv_to_rgb, set_fx};

fn main() -> miette::Result<()> {
    // Print strings w/ truecolor foreground, background, and attribute codes.
    {
        let style = StyleSpec::new()
            .fg(RgbColor::from((50, 50, 50)))
            .bg(RgbColor::from((100, 200, 1)))
            .bold()
            .italic()
            .underline();
        println!(
            "{}Print a formatted (bold, italic, underline) string w/ ANSI color codes.{}",
            set_fx(style, CapabilityTier::TrueColor),
            clear_fx()
        );

        let style = StyleSpec::new()
            .fg(RgbColor::from((200, 50, 50)))
            .bg(RgbColor::from((200, 200, 1)))
            .strikethrough()
            .overline();
        println!(
            "{}Overline and strikethrough line.{}",
            set_fx(style, CapabilityTier::TrueColor),
            clear_fx()
        );
    }

    // A hue sweep, converted from HSV.
    {
        let mut line = String::new();
        for hue in (0..360).step_by(10) {
            let color = hsv_to_rgb(hue, 100, 100)?;
            let seq = set_fx(StyleSpec::new().bg(color), CapabilityTier::TrueColor);
            line.push_str(seq.as_str());
            line.push(' ');
        }
        line.push_str(clear_fx().as_str());
        println!("{line}");
    }

    // Colors can be parsed from "r,g,b" strings.
    {
        let color: RgbColor = "135, 206, 235".parse()?;
        println!(
            "{}Sky blue, parsed from a string.{}",
            set_fx(StyleSpec::new().fg(color), CapabilityTier::TrueColor),
            clear_fx()
        );
    }

    // Set the capability override to 256-color mode.
    {
        global_capability::set_override(CapabilityTier::Indexed256);
        let msg = format!(
            "> Force 256-color mode ({:?})",
            global_capability::detect()
        );
        print_samples(&msg);
    }

    // Set the capability override to truecolor mode.
    {
        global_capability::set_override(CapabilityTier::TrueColor);
        let msg = format!(
            "> Force truecolor mode ({:?})",
            global_capability::detect()
        );
        print_samples(&msg);
    }

    // Set the capability override to basic palette mode.
    {
        global_capability::set_override(CapabilityTier::Ansi16);
        let msg = format!(
            "> Force basic palette mode ({:?})",
            global_capability::detect()
        );
        print_samples(&msg);
    }

    // Use runtime detection to determine the capability tier.
    {
        global_capability::clear_override();
        let msg = format!(
            "> Runtime detection of capability tier ({:?})",
            global_capability::detect()
        );
        print_samples(&msg);
    }

    Ok(())
}

fn print_samples(msg: &str) {
    let tier = global_capability::detect();

    let heading = StyleSpec::new()
        .fg(RgbColor::from((200, 200, 1)))
        .bg(RgbColor::from((100, 60, 150)))
        .underline();
    println!("{}{msg}{}", set_fx(heading, tier), clear_fx());

    let eg_1 = StyleSpec::new()
        .fg(RgbColor::from((100, 60, 150)))
        .bg(RgbColor::from((100, 200, 50)));
    println!("eg_1: {}Hello{}", set_fx(eg_1, tier), clear_fx());

    let eg_2 = StyleSpec::new()
        .fg(RgbColor::from((135, 206, 235)))
        .bg(RgbColor::from((50, 50, 100)))
        .bold();
    println!("eg_2: {}World{}", set_fx(eg_2, tier), clear_fx());
}
