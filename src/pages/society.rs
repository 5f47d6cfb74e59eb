//! Society page (koinwnia): dianeosis survey questions across six waves.
//!
//! Charts are grouped under lockdown-period subheadings. All values are
//! percentages of respondents unless a title states otherwise; sums off
//! 100% are rounding artifacts in the published tables.

use std::path::Path;

use crate::chart::{
    BarChart, Chart, HAnchor, HoverMode, LineChart, LineMode, Margin, TextPosition, Theme,
    VAnchor, normalize, palette,
};
use crate::core::{Cell, Table, load_csv};
use crate::error::DashResult;
use crate::page::{Block, Page};
use crate::pages::HEADER_TEXT;

const INTRO: &str = "Επιλεγμένες ερωτήσεις 6 ερευνών του οργανισμού έρευνας και ανάλυσης \
«διαΝΕΟσις». Οι έρευνες αυτές διεξήχθησαν τον Απρίλιο, Σεπτέμβριο και Δεκέμβριο 2020, \
και Ιανουάριο, Μάρτιο και Μάιο 2021, οι οποίες απαρτίζονται από ερωτήσεις με κεντρικό \
άξονα την πανδημία. Κατά μέσο όρο, σε κάθε έρευνα έλαβαν μέρος 1.153 άτομα ηλικίας 17 \
ετών και άνω. Αθροίσματα που υπολείπονται του 100% ή υπερβαίνουν το 100%, οφείλονται σε \
στρογγυλοποιήσεις.";

/// Survey-wave groups, with the number of charts each one shows.
const GROUPS: [(&str, usize); 4] = [
    ("Πρώτο lockdown - Απρίλιος 2020", 2),
    ("Λήξη πρώτου lockdown - Σεπτέμβριος 2020", 2),
    ("Δεύτερο lockdown - Δεκέμβριος, Ιανουάριος & Μάρτιος 2021", 6),
    ("Λήξη δεύτερου lockdown - Μάιος 2021", 5),
];

fn theme() -> Theme {
    Theme::default().with_margin(Margin::new(30, 30, 150, 70))
}

/// Survey legends sit above taller title blocks than the shared default.
fn raise_legend(chart: &mut Chart, y: f64) {
    let legend = &mut chart.layout.legend;
    legend.y_anchor = VAnchor::Top;
    legend.y = y;
    legend.x_anchor = HAnchor::Center;
    legend.x = 0.47;
}

#[must_use]
pub fn page(data_dir: &Path) -> Page {
    let mut page = Page::new("Κοινωνία");
    page.push(Block::Markdown(HEADER_TEXT.to_owned()));
    page.push(Block::Heading("ΚΟΙΝΩΝΙΚΕΣ ΕΠΙΠΤΩΣΕΙΣ & ΑΠΟΨΕΙΣ".to_owned()));
    page.push(Block::Link {
        text: INTRO.to_owned(),
        href: "https://www.dianeosis.org/research/covid-19/".to_owned(),
    });
    match charts(data_dir) {
        Ok(charts) => {
            let mut charts = charts.into_iter();
            for (heading, count) in GROUPS {
                page.push(Block::Subheading(heading.to_owned()));
                for chart in charts.by_ref().take(count) {
                    page.push(Block::chart(chart));
                }
            }
        }
        Err(error) => tracing::warn!(%error, page = "koinwnia", "skipping charts"),
    }
    page
}

/// Built in display order; [`GROUPS`] slices this list into wave sections.
fn charts(data_dir: &Path) -> DashResult<Vec<Chart>> {
    Ok(vec![
        activities(data_dir)?,
        stress()?,
        personal_statements(data_dir)?,
        long_term_effects(data_dir)?,
        vaccine_when_available(data_dir)?,
        agreement_statements(data_dir)?,
        national_threats(data_dir)?,
        information_sources(data_dir)?,
        daily_life_change(data_dir)?,
        vaccination_pace(data_dir)?,
        country_direction(data_dir)?,
        institution_trust(data_dir)?,
        employment_status(data_dir)?,
        emotions(data_dir)?,
        vaccination_intent(data_dir)?,
    ])
}

/// `erwtisi_6_apr20.csv`: erwtisi, timi, vathmos.
fn activities(data_dir: &Path) -> DashResult<Chart> {
    let table = load_csv(data_dir.join("erwtisi_6_apr20.csv"))?;
    let mut chart = BarChart::new(&table, "erwtisi", "timi")
        .palette(palette::PASTEL)
        .facet("vathmos", 1)
        .facet_row_spacing(0.08)
        .height(500)
        .y_title("")
        .build()?;
    normalize(
        &mut chart,
        "Την περίοδο αυτή, κάνετε τα παρακάτω περισσότερο, το ίδιο, ή λιγότερο, σε σύγκριση με 3-4 μήνες πριν;",
        &theme(),
    );
    chart.set_hover_template("%{y}%");
    Ok(chart)
}

/// Published only as totals, so the table is built inline.
fn stress() -> DashResult<Chart> {
    let mut table = Table::new(["apantisi", "timi"]);
    for (answer, share) in [("1", 14.4), ("2", 15.0), ("3", 33.0), ("4", 27.2), ("5", 10.4)] {
        table.push_row(vec![Cell::text(answer), Cell::Number(share)])?;
    }

    let mut chart = BarChart::new(&table, "timi", "apantisi")
        .palette(palette::ANTIQUE)
        .x_title("")
        .y_title("")
        .build()?;
    normalize(
        &mut chart,
        "Πόσο άγχος αισθάνεστε ότι έχετε σε μια κλίμακα 1-5; (1=καθόλου άγχος έως 5=πάρα πολύ άγχος)",
        &theme(),
    );
    chart.layout.hover_mode = HoverMode::Y;
    raise_legend(&mut chart, 1.10);
    chart.set_hover_template("%{x}%");
    Ok(chart)
}

/// `erwtisi_11_sept20.csv`: erwtisi, vathmos, apantisi.
fn personal_statements(data_dir: &Path) -> DashResult<Chart> {
    let table = load_csv(data_dir.join("erwtisi_11_sept20.csv"))?;
    let mut chart = BarChart::new(&table, "vathmos", "erwtisi")
        .color_by("apantisi")
        .text("vathmos")
        .palette(palette::ANTIQUE)
        .width(900)
        .height(800)
        .x_title("")
        .y_title("")
        .build()?;
    normalize(
        &mut chart,
        "Ποιο από τα παρακάτω ισχύει για εσάς προσωπικά;",
        &theme(),
    );
    chart.layout.hover_mode = HoverMode::Y;
    raise_legend(&mut chart, 1.05);
    // long statement labels need the wide left margin
    chart.layout.margin = Some(Margin::new(300, 100, 100, 50));
    chart.set_text_font_size(10);
    chart.set_hover_template("%{x}%");
    Ok(chart)
}

/// `erwtisi_19_sept20.csv`: apantisi, timi, vathmos, date.
fn long_term_effects(data_dir: &Path) -> DashResult<Chart> {
    let table = load_csv(data_dir.join("erwtisi_19_sept20.csv"))?;
    let mut chart = BarChart::new(&table, "timi", "apantisi")
        .color_by("vathmos")
        .text("timi")
        .palette(palette::BOLD)
        .facet("date", 2)
        .width(1000)
        .height(500)
        .y_title("")
        .build()?;
    normalize(
        &mut chart,
        "Ποιες θα είναι οι μακροχρόνιες επιπτώσεις της πανδημίας; Θα επηρεάσει θετικά, ουδέτερα ή αρνητικά...",
        &theme(),
    );
    chart.layout.hover_mode = HoverMode::Y;
    raise_legend(&mut chart, 1.16);
    chart.set_text_font_size(13);
    chart.set_hover_template("%{x}%");
    Ok(chart)
}

/// `erwtisi_13_dash.csv`: apantisi, timi.
fn vaccine_when_available(data_dir: &Path) -> DashResult<Chart> {
    let table = load_csv(data_dir.join("erwtisi_13_dash.csv"))?;
    let mut chart = BarChart::new(&table, "apantisi", "timi")
        .color_by("apantisi")
        .text("timi")
        .palette(palette::VIVID)
        .x_title("")
        .y_title("")
        .build()?;
    normalize(
        &mut chart,
        "Σκέφτεστε να εμβολιαστείτε όταν θα είναι διαθέσιμο δωρεάν ένα εμβόλιο κατά του νέου κορωνοϊού, εγκεκριμένο από την Ε.Ε. και τις υγειονομικές αρχές της χώρας μας;",
        &theme(),
    );
    chart.layout.margin = Some(Margin::new(30, 30, 200, 70));
    chart.set_text_font_size(12);
    chart.set_text_position(TextPosition::Inside);
    chart.set_hover_template("%{y}%");
    Ok(chart)
}

/// `erwtisi_14_dash.csv`: apantisi, timi.
fn agreement_statements(data_dir: &Path) -> DashResult<Chart> {
    let table = load_csv(data_dir.join("erwtisi_14_dash.csv"))?;
    let mut chart = BarChart::new(&table, "timi", "apantisi")
        .text("timi")
        .palette(palette::DARK2)
        .x_title("")
        .y_title("")
        .build()?;
    normalize(
        &mut chart,
        "Με ποια από τις παρακάτω προτάσεις συμφωνείτε περισσότερο; (N=66.3%, Σίγουρα/Μάλλον Ναι)",
        &theme(),
    );
    chart.set_text_font_size(12);
    chart.set_hover_template("%{x}%");
    chart.layout.hover_mode = HoverMode::X;
    Ok(chart)
}

/// `erwtisi_4_jan21.csv`: apantisi, timi, date.
fn national_threats(data_dir: &Path) -> DashResult<Chart> {
    let table = load_csv(data_dir.join("erwtisi_4_jan21.csv"))?;
    let mut chart = BarChart::new(&table, "timi", "apantisi")
        .text("timi")
        .palette(palette::PASTEL2)
        .facet("date", 1)
        .x_title("")
        .y_title("")
        .build()?;
    normalize(
        &mut chart,
        "Πόσο σημαντική είναι καθεμία από τις παρακάτω απειλές που αντιμετωπίζει σήμερα η χώρα μας; (0=καθόλου σημαντική έως 10=πάρα πολύ σημαντική)",
        &theme(),
    );
    chart.layout.hover_mode = HoverMode::Y;
    raise_legend(&mut chart, 1.10);
    chart.set_text_font_size(12);
    chart.set_hover_template("%{x}");
    Ok(chart)
}

/// `erwtisi_7_jan21.csv`: date, timi, apantisi.
fn information_sources(data_dir: &Path) -> DashResult<Chart> {
    let table = load_csv(data_dir.join("erwtisi_7_jan21.csv"))?;
    let mut chart = BarChart::new(&table, "date", "timi")
        .text("timi")
        .palette(palette::PLOTLY)
        .facet("apantisi", 4)
        .x_title("")
        .y_title("")
        .build()?;
    normalize(
        &mut chart,
        "Ποια είναι η κύρια πηγή ενημέρωσής σας αναφορικά με την πανδημία του κορωνοϊού;",
        &theme(),
    );
    chart.set_text_font_size(10);
    chart.set_hover_template("%{y}%");
    Ok(chart)
}

/// `erwtisi_7_march21.csv`: erwtisi, timi, vathmos, date.
fn daily_life_change(data_dir: &Path) -> DashResult<Chart> {
    let table = load_csv(data_dir.join("erwtisi_7_march21.csv"))?;
    let mut chart = BarChart::new(&table, "timi", "erwtisi")
        .color_by("vathmos")
        .text("timi")
        .palette(palette::PASTEL2)
        .facet("date", 1)
        .height(700)
        .y_title("")
        .build()?;
    normalize(
        &mut chart,
        "Πόσο έχει αλλάξει η καθημερινή σας ζωή εξαιτίας της πανδημίας;",
        &theme(),
    );
    chart.layout.hover_mode = HoverMode::Y;
    raise_legend(&mut chart, 1.10);
    chart.set_text_font_size(10);
    chart.set_hover_template("%{x}%");
    Ok(chart)
}

/// `erwtisi_14_march21.csv`: perifereia, timi, apantisi.
fn vaccination_pace(data_dir: &Path) -> DashResult<Chart> {
    let table = load_csv(data_dir.join("erwtisi_14_march21.csv"))?;
    let mut chart = BarChart::new(&table, "timi", "perifereia")
        .color_by("apantisi")
        .text("timi")
        .palette(palette::VIVID)
        .x_title("")
        .y_title("")
        .build()?;
    normalize(
        &mut chart,
        "Eίναι ικανοποιητικός ο ρυθμός εμβολιασμών μέχρι τώρα ή όχι; (NUTS 1)",
        &theme(),
    );
    chart.layout.hover_mode = HoverMode::Y;
    chart.set_text_font_size(12);
    chart.set_hover_template("%{x}%");
    Ok(chart)
}

/// `erwtisi_1_dash.csv`: date, timi, apantisi.
fn country_direction(data_dir: &Path) -> DashResult<Chart> {
    let table = load_csv(data_dir.join("erwtisi_1_dash.csv"))?;
    let mut chart = LineChart::new(&table, "date", "timi")
        .color_by("apantisi")
        .palette(palette::PASTEL1)
        .y_title("")
        .build()?;
    normalize(
        &mut chart,
        "Η χώρα μας αυτή την περίοδο κινείται προς τη σωστή ή προς τη λάθος κατεύθυνση;",
        &theme(),
    );
    chart.set_line_mode(LineMode::MarkersLines);
    chart.set_hover_template("%{y}%");
    chart.layout.font_size = 10;
    Ok(chart)
}

/// `erwtisi_8_dash.csv`: foreas, timi, date.
fn institution_trust(data_dir: &Path) -> DashResult<Chart> {
    let table = load_csv(data_dir.join("erwtisi_8_dash.csv"))?;
    let mut chart = BarChart::new(&table, "foreas", "timi")
        .color_by("date")
        .grouped()
        .palette(palette::PASTEL1)
        .x_title("")
        .y_title("")
        .build()?;
    normalize(
        &mut chart,
        "Πόση εμπιστοσύνη έχετε στους παρακάτω, αναφορικά με την αντιμετώπιση της πανδημίας του κορωνοϊού; (μέσοι όροι, από 1=καθόλου εμπιστοσύνη έως 5=απόλυτη εμπιστοσύνη)",
        &theme(),
    );
    chart.set_text_position(TextPosition::Outside);
    chart.set_text_font_size(12);
    Ok(chart)
}

/// `erwtisi_32.csv`: date, timi, apantisi.
fn employment_status(data_dir: &Path) -> DashResult<Chart> {
    let table = load_csv(data_dir.join("erwtisi_32.csv"))?;
    let mut chart = BarChart::new(&table, "date", "timi")
        .color_by("apantisi")
        .text("timi")
        .palette(palette::SAFE)
        .facet("apantisi", 2)
        .height(900)
        .y_title("")
        .build()?;
    normalize(
        &mut chart,
        "Ποια είναι η εργασιακή σας κατάσταση αυτή την περίοδο;",
        &theme(),
    );
    chart.layout.margin = Some(Margin::new(30, 30, 250, 50));
    raise_legend(&mut chart, 1.2);
    chart.set_text_font_size(12);
    chart.set_hover_template("%{y}%");
    Ok(chart)
}

/// `erwtisi_2.csv`: `Unnamed: 0` (emotion), value, date.
fn emotions(data_dir: &Path) -> DashResult<Chart> {
    let table = load_csv(data_dir.join("erwtisi_2.csv"))?;
    let mut chart = BarChart::new(&table, "value", "Unnamed: 0")
        .color_by("date")
        .text("value")
        .palette(palette::BOLD)
        .facet("date", 2)
        .height(1000)
        .x_title("")
        .y_title("")
        .build()?;
    normalize(
        &mut chart,
        "Ποια συναισθήματα σας διακατέχουν πιο έντονα σήμερα ως Έλληνα/Ελληνίδα; (πρώτη αναφορά)",
        &theme(),
    );
    chart.layout.hover_mode = HoverMode::Y;
    raise_legend(&mut chart, 1.06);
    chart.set_text_font_size(12);
    chart.set_hover_template("%{x}%");
    Ok(chart)
}

/// `erwtisi_19.csv`: date, timi, apantisi.
fn vaccination_intent(data_dir: &Path) -> DashResult<Chart> {
    let table = load_csv(data_dir.join("erwtisi_19.csv"))?;
    let mut chart = BarChart::new(&table, "date", "timi")
        .color_by("apantisi")
        .grouped()
        .text("timi")
        .palette(palette::T10)
        .y_title("")
        .build()?;
    normalize(
        &mut chart,
        "Εσείς προσωπικά σκέφτεστε να εμβολιαστείτε ή όχι κατά του νέου κορωνοϊού;",
        &theme(),
    );
    chart.set_text_position(TextPosition::Inside);
    chart.set_text_font_size(12);
    chart.set_hover_template("%{y}%");
    Ok(chart)
}
