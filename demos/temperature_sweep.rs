use anyhow::Result;
use logit_visualizer::format::format_number;
use logit_visualizer::{argmax, sigmoid_steps, softmax_steps, EntryList};

fn main() -> Result<()> {
    let entries = EntryList::default().with_label("3", "Truck")?;
    let labels: Vec<&str> = entries.as_slice().iter().map(|e| e.label.as_str()).collect();

    println!(" - Softmax across temperatures");
    println!("{:>6} | {}", "T", labels.join(" | "));
    println!("{:-<60}", "");
    for temperature in [0.0, 0.1, 0.5, 1.0, 2.0, 5.0] {
        let steps = softmax_steps(entries.as_slice(), temperature);
        let probs: Vec<String> = steps
            .iter()
            .map(|s| format_number(s.probability, 4))
            .collect();
        let winner = argmax(&steps).map_or("-", |s| s.label.as_str());
        println!("{temperature:>6.2} | {} | ★ {winner}", probs.join(" | "));
    }

    println!();
    println!(" - Sigmoid across temperatures (threshold 0.5)");
    println!("{:-<60}", "");
    for temperature in [0.5, 1.0, 5.0] {
        let steps = sigmoid_steps(entries.as_slice(), temperature);
        let cells: Vec<String> = steps
            .iter()
            .map(|s| {
                let marker = if s.probability >= 0.5 { "*" } else { "" };
                format!("{}{marker}", format_number(s.probability, 4))
            })
            .collect();
        println!("{temperature:>6.2} | {}", cells.join(" | "));
    }

    Ok(())
}
