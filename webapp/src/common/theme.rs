// Design tokens for the whole app
//
// the palettes, font stack and animations live here as plain data and are
// rendered into css custom properties once at startup; the hand-written
// stylesheets in common::style only ever refer to the var(--...) names

use std::fmt;

pub const SHADE_STEPS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorScale {
    pub name: &'static str,
    // indexed the same way as SHADE_STEPS
    pub shades: [&'static str; 10],
}

impl ColorScale {
    pub fn shade(&self, step: u16) -> Option<&'static str> {
        SHADE_STEPS
            .iter()
            .position(|s| *s == step)
            .map(|idx| self.shades[idx])
    }

    pub fn steps(&self) -> impl Iterator<Item = (u16, &'static str)> + '_ {
        SHADE_STEPS.iter().copied().zip(self.shades.iter().copied())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Animation {
    pub name: &'static str,
    pub keyframes: &'static str,
    pub duration: &'static str,
    pub timing: &'static str,
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.keyframes, self.duration, self.timing)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Keyframe {
    pub percent: u8,
    pub declarations: &'static [(&'static str, &'static str)],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Keyframes {
    pub name: &'static str,
    pub frames: &'static [Keyframe],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub colors: [ColorScale; 3],
    pub font_sans: &'static [&'static str],
    pub animations: &'static [Animation],
    pub keyframes: &'static [Keyframes],
}

pub const PRIMARY: ColorScale = ColorScale {
    name: "primary",
    shades: [
        "#f0fdfc", "#ccfbf1", "#99f6e4", "#5eedd8", "#2dd4bf", "#25c5bb", "#0d9488", "#0f766e",
        "#115e59", "#134e4a",
    ],
};

pub const SECONDARY: ColorScale = ColorScale {
    name: "secondary",
    shades: [
        "#fefcf3", "#fef7e6", "#fdecc6", "#fbdc9d", "#f9cb72", "#f9f4e9", "#d69e2e", "#b7791f",
        "#975a16", "#744210",
    ],
};

pub const DARK: ColorScale = ColorScale {
    name: "dark",
    shades: [
        "#f6f7f7", "#e1e5e5", "#c3cccd", "#9eabac", "#7a8a8c", "#5f7274", "#4a5a5c", "#3d4a4c",
        "#323e40", "#042428",
    ],
};

pub const THEME: Theme = Theme {
    colors: [PRIMARY, SECONDARY, DARK],
    font_sans: &["Inter", "system-ui", "sans-serif"],
    animations: &[
        Animation {
            name: "fade-in",
            keyframes: "fadeIn",
            duration: "0.5s",
            timing: "ease-in-out",
        },
        Animation {
            name: "slide-up",
            keyframes: "slideUp",
            duration: "0.3s",
            timing: "ease-out",
        },
    ],
    keyframes: &[
        Keyframes {
            name: "fadeIn",
            frames: &[
                Keyframe {
                    percent: 0,
                    declarations: &[("opacity", "0")],
                },
                Keyframe {
                    percent: 100,
                    declarations: &[("opacity", "1")],
                },
            ],
        },
        Keyframes {
            name: "slideUp",
            frames: &[
                Keyframe {
                    percent: 0,
                    declarations: &[("transform", "translateY(10px)"), ("opacity", "0")],
                },
                Keyframe {
                    percent: 100,
                    declarations: &[("transform", "translateY(0)"), ("opacity", "1")],
                },
            ],
        },
    ],
};

impl Theme {
    // family names containing anything but letters and dashes need quoting
    pub fn font_stack(&self) -> String {
        self.font_sans
            .iter()
            .map(|family| {
                if family.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                    family.to_string()
                } else {
                    format!("'{family}'")
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ":root {{")?;
        for scale in &self.colors {
            for (step, hex) in scale.steps() {
                writeln!(f, "  --color-{}-{step}: {hex};", scale.name)?;
            }
        }
        writeln!(f, "  --font-sans: {};", self.font_stack())?;
        for anim in self.animations {
            writeln!(f, "  --animate-{}: {anim};", anim.name)?;
        }
        writeln!(f, "}}")?;

        for keyframes in self.keyframes {
            writeln!(f, "@keyframes {} {{", keyframes.name)?;
            for frame in keyframes.frames {
                write!(f, "  {}% {{", frame.percent)?;
                for (property, value) in frame.declarations {
                    write!(f, " {property}: {value};")?;
                }
                writeln!(f, " }}")?;
            }
            writeln!(f, "}}")?;
        }

        for anim in self.animations {
            writeln!(
                f,
                ".animate-{0} {{ animation: var(--animate-{0}); }}",
                anim.name
            )?;
        }

        Ok(())
    }
}
