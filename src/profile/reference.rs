use serde::{Deserialize, Serialize};

/// Grid attribute carried by every reference profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileAttribute {
    Rows,
    Columns,
    HotseatIcons,
    IconSize,
    IconTextSize,
    HotseatIconSize,
}

impl ProfileAttribute {
    pub const ALL: [ProfileAttribute; 6] = [
        ProfileAttribute::Rows,
        ProfileAttribute::Columns,
        ProfileAttribute::HotseatIcons,
        ProfileAttribute::IconSize,
        ProfileAttribute::IconTextSize,
        ProfileAttribute::HotseatIconSize,
    ];
}

/// Hand-tuned grid parameters for one known screen size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceProfile {
    pub name: String,
    pub width_dp: f32,
    pub height_dp: f32,
    pub num_rows: f32,
    pub num_columns: f32,
    pub num_hotseat_icons: f32,
    pub icon_size_dp: f32,
    pub icon_text_size_sp: f32,
    pub hotseat_icon_size_dp: f32,
}

impl ReferenceProfile {
    /// Anchor at `(width_dp, height_dp)` with a 4x4 grid of 48dp icons and a
    /// five-slot hotseat; adjust with the builder methods.
    pub fn new(name: impl Into<String>, width_dp: f32, height_dp: f32) -> Self {
        Self {
            name: name.into(),
            width_dp,
            height_dp,
            num_rows: 4.0,
            num_columns: 4.0,
            num_hotseat_icons: 5.0,
            icon_size_dp: 48.0,
            icon_text_size_sp: 13.0,
            hotseat_icon_size_dp: 48.0,
        }
    }

    pub fn with_grid(mut self, rows: f32, columns: f32) -> Self {
        self.num_rows = rows;
        self.num_columns = columns;
        self
    }

    pub fn with_icons(mut self, icon_size_dp: f32, icon_text_size_sp: f32) -> Self {
        self.icon_size_dp = icon_size_dp;
        self.icon_text_size_sp = icon_text_size_sp;
        self
    }

    pub fn with_hotseat(mut self, icons: f32, icon_size_dp: f32) -> Self {
        self.num_hotseat_icons = icons;
        self.hotseat_icon_size_dp = icon_size_dp;
        self
    }

    pub fn value(&self, attribute: ProfileAttribute) -> f32 {
        match attribute {
            ProfileAttribute::Rows => self.num_rows,
            ProfileAttribute::Columns => self.num_columns,
            ProfileAttribute::HotseatIcons => self.num_hotseat_icons,
            ProfileAttribute::IconSize => self.icon_size_dp,
            ProfileAttribute::IconTextSize => self.icon_text_size_sp,
            ProfileAttribute::HotseatIconSize => self.hotseat_icon_size_dp,
        }
    }

    /// Hotseat slot count, when it is a whole number.
    pub fn hotseat_count(&self) -> Option<i32> {
        let count = self.num_hotseat_icons;
        (count.fract() == 0.0).then_some(count as i32)
    }
}

#[rustfmt::skip]
const BUILTIN: [(&str, f32, f32, f32, f32, f32, f32, f32, f32); 11] = [
    // name, width, height, rows, columns, icon, text, hotseat, hotseat icon
    ("Super Short Stubby", 255.0, 300.0, 2.0, 3.0, 48.0, 13.0, 3.0, 48.0),
    ("Shorter Stubby", 255.0, 400.0, 3.0, 3.0, 48.0, 13.0, 3.0, 48.0),
    ("Short Stubby", 275.0, 420.0, 3.0, 4.0, 48.0, 13.0, 5.0, 48.0),
    ("Stubby", 255.0, 450.0, 3.0, 4.0, 48.0, 13.0, 5.0, 48.0),
    ("Small Phone", 296.0, 491.33, 4.0, 4.0, 48.0, 13.0, 5.0, 48.0),
    ("Compact Phone", 335.0, 567.0, 4.0, 4.0, 54.0, 13.0, 5.0, 56.0),
    ("Phone", 359.0, 567.0, 4.0, 4.0, 54.0, 13.0, 5.0, 56.0),
    ("Large Phone", 406.0, 694.0, 5.0, 5.0, 64.0, 14.4, 5.0, 56.0),
    ("Small Tablet", 575.0, 904.0, 5.0, 6.0, 72.0, 14.4, 7.0, 60.0),
    ("Tablet", 727.0, 1207.0, 5.0, 6.0, 76.0, 14.4, 7.0, 64.0),
    ("Large Tablet", 1527.0, 2527.0, 7.0, 7.0, 100.0, 20.0, 7.0, 72.0),
];

/// Reference table spanning small phones to large tablets.
pub fn builtin_profiles() -> Vec<ReferenceProfile> {
    BUILTIN
        .iter()
        .map(|&(name, w, h, rows, cols, icon, text, hotseat, hotseat_icon)| {
            ReferenceProfile::new(name, w, h)
                .with_grid(rows, cols)
                .with_icons(icon, text)
                .with_hotseat(hotseat, hotseat_icon)
        })
        .collect()
}
