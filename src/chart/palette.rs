//! Qualitative color sequences used by the dashboard pages.
//!
//! Values are CSS color strings consumed verbatim by the display host.

pub const PLOTLY: &[&str] = &[
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

pub const SET2: &[&str] = &[
    "rgb(102,194,165)",
    "rgb(252,141,98)",
    "rgb(141,160,203)",
    "rgb(231,138,195)",
    "rgb(166,216,84)",
    "rgb(255,217,47)",
    "rgb(229,196,148)",
    "rgb(179,179,179)",
];

pub const PASTEL: &[&str] = &[
    "rgb(102,197,204)",
    "rgb(246,207,113)",
    "rgb(248,156,116)",
    "rgb(220,176,242)",
    "rgb(135,197,95)",
    "rgb(158,185,243)",
    "rgb(254,136,177)",
    "rgb(201,219,116)",
    "rgb(139,224,164)",
    "rgb(180,151,231)",
    "rgb(179,179,179)",
];

pub const PASTEL1: &[&str] = &[
    "rgb(251,180,174)",
    "rgb(179,205,227)",
    "rgb(204,235,197)",
    "rgb(222,203,228)",
    "rgb(254,217,166)",
    "rgb(255,255,204)",
    "rgb(229,216,189)",
    "rgb(253,218,236)",
    "rgb(242,242,242)",
];

pub const PASTEL2: &[&str] = &[
    "rgb(179,226,205)",
    "rgb(253,205,172)",
    "rgb(203,213,232)",
    "rgb(244,202,228)",
    "rgb(230,245,201)",
    "rgb(255,242,174)",
    "rgb(241,226,204)",
    "rgb(204,204,204)",
];

pub const ANTIQUE: &[&str] = &[
    "rgb(133,92,117)",
    "rgb(217,175,107)",
    "rgb(175,100,88)",
    "rgb(115,111,76)",
    "rgb(82,106,131)",
    "rgb(98,83,119)",
    "rgb(104,133,92)",
    "rgb(156,156,94)",
    "rgb(160,97,119)",
    "rgb(140,120,93)",
    "rgb(124,124,124)",
];

pub const BOLD: &[&str] = &[
    "rgb(127,60,141)",
    "rgb(17,165,121)",
    "rgb(57,105,172)",
    "rgb(242,183,1)",
    "rgb(231,63,116)",
    "rgb(128,186,90)",
    "rgb(230,131,16)",
    "rgb(0,134,149)",
    "rgb(207,28,144)",
    "rgb(249,123,114)",
    "rgb(165,170,153)",
];

pub const VIVID: &[&str] = &[
    "rgb(229,134,6)",
    "rgb(93,105,177)",
    "rgb(82,188,163)",
    "rgb(153,201,69)",
    "rgb(204,97,176)",
    "rgb(36,121,108)",
    "rgb(218,165,27)",
    "rgb(47,138,196)",
    "rgb(118,78,159)",
    "rgb(237,100,90)",
    "rgb(165,170,153)",
];

pub const DARK2: &[&str] = &[
    "rgb(27,158,119)",
    "rgb(217,95,2)",
    "rgb(117,112,179)",
    "rgb(231,41,138)",
    "rgb(102,166,30)",
    "rgb(230,171,2)",
    "rgb(166,118,29)",
    "rgb(102,102,102)",
];

pub const DARK24: &[&str] = &[
    "#2E91E5", "#E15F99", "#1CA71C", "#FB0D0D", "#DA16FF", "#222A2A", "#B68100", "#750D86",
    "#EB663B", "#511CFB", "#00A08B", "#FB00D1", "#FC0080", "#B2828D", "#6C7C32", "#778AAE",
    "#862A16", "#A777F1", "#620042", "#1616A7", "#DA60CA", "#6C4516", "#0D2A63", "#AF0038",
];

pub const SAFE: &[&str] = &[
    "rgb(136,204,238)",
    "rgb(204,102,119)",
    "rgb(221,204,119)",
    "rgb(17,119,51)",
    "rgb(51,34,136)",
    "rgb(170,68,153)",
    "rgb(68,170,153)",
    "rgb(153,153,51)",
    "rgb(136,34,85)",
    "rgb(102,17,0)",
    "rgb(136,136,136)",
];

pub const T10: &[&str] = &[
    "#4C78A8", "#F58518", "#E45756", "#72B7B2", "#54A24B", "#EECA3B", "#B279A2", "#FF9DA6",
    "#9D755D", "#BAB0AC",
];

/// Single-hue sequence for one-series line charts.
pub const TEAL: &[&str] = &["rgb(102, 197, 204)"];

/// Darker single-hue counterpart of [`TEAL`].
pub const DEEP_TEAL: &[&str] = &["rgb(29,105,150)"];

/// Three-step teal sequence for small multi-line charts.
pub const TEAL_TRIO: &[&str] = &[
    "rgb(102, 197, 204)",
    "rgb(82,188,163)",
    "rgb(29,105,150)",
];
