//! Landing page (arxiki): introduction and navigation help, no charts.

use crate::page::{Block, Page};

const INTRO: &str = "Το ηλεκτρονικό αυτό ταμπλό, αποτελεί το προϊόν της διπλωματικής εργασίας \
της Τζελέπη Γεωργίας, η οποία φοιτά στο τμήμα Μηχανικών Χωροταξίας & Ανάπτυξης, της \
Πολυτεχνικής Σχολής του Αριστοτελείου Πανεπιστημίου Θεσσαλονίκης. Η εργασία έχει τίτλο \
**\"COVID-19 με γραφήματα: πως η ελληνική οικονομία & κοινωνία βιώνουν την πανδημία\"**. \
Απώτερος στόχος του παρόντος, συνιστά η αξιοποίησή του ως ένα δυναμικό εργαλείο \
πληροφόρησης για το σχεδιασμό μελλοντικών πολιτικών και μέτρων, παρακολουθώντας \
ταυτοχρόνως τις πολύπλευρες εξελίξεις στη χώρα, εξελίξεις που αφορούν \
επιδημιολογικά/ιατρικά στοιχεία, βασικά οικονομικά μεγέθη, όπως επίσης, και αντιλήψεις \
των πολιτών.";

const NAVIGATION: &str = "***ΠΕΡΙΗΓΗΣΗ***     Πάνω αριστερά εντοπίζονται οι 4 σελίδες του \
ταμπλό. Καθεμία λέξη αντιπροσωπεύει και την αντίστοιχη θεματική σελίδα.";

const USAGE: &str = "***ΧΡΗΣΗ***     Τα γραφήματα των σελίδων είναι διαδραστικά. \
Συγκεκριμένα, σέρνοντας απλά τον κέρσορα στο επιθυμητό γράφημα, εμφανίζονται εικονίδια \
τα οποία δίνουν τη δυνατότητα αποθήκευσης του γραφήματος σε μορφή PNG, zoom in και zoom \
out, επιλογής συγκεκριμένης περιοχής στο γράφημα, κ.α. Εναλλακτικά, zoom in σε γράφημα \
μπορεί να γίνει επιλέγοντας με ένα κλικ, και ταυτοχρόνως, σέρνοντας τον κέρσορα, στην \
περιοχή επιθυμητής εστίασης. Zoom out γίνεται κάνοντας διπλό κλικ πάνω στο γράφημα.";

#[must_use]
pub fn page() -> Page {
    let mut page = Page::new("Αρχική");
    page.push(Block::Markdown("**COVID-19 Dashboard**".to_owned()));
    page.push(Block::Markdown(INTRO.to_owned()));
    page.push(Block::Link {
        text: "Ο κώδικας του Dashboard καθώς και οι πηγές των γραφημάτων μπορούν να βρεθούν εδώ."
            .to_owned(),
        href: "https://github.com/gntzelepi/covid19_dashboard".to_owned(),
    });
    page.push(Block::Markdown(NAVIGATION.to_owned()));
    page.push(Block::Markdown(USAGE.to_owned()));
    page.push(Block::Image {
        asset: "auth.png".to_owned(),
    });
    page.push(Block::Image {
        asset: "tmxa.png".to_owned(),
    });
    page
}
