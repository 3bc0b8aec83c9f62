use crate::input::Outcome;

const LINE: &str = "____________________________________________________________";

pub fn greet() {
    frame(&["Hello! I'm Taskline", "What can I do for you?"]);
}

pub fn bye() {
    frame(&["Bye. Hope to see you again soon!"]);
}

pub fn error(msg: &str) {
    frame(&[msg]);
}

/// Render one command outcome inside the banner frame.
pub fn render(outcome: &Outcome) {
    match outcome {
        Outcome::Exit => bye(),
        Outcome::Listed(tasks) => numbered(tasks, "Here are the tasks in your list:", "(no items yet)"),
        Outcome::Added { task, total } => acknowledged("Got it. I've added this task:", task, *total),
        Outcome::Removed { task, total } => acknowledged("Noted. I've removed this task:", task, *total),
        Outcome::Toggled { task, done } => {
            let header = if *done {
                "Nice! I've marked this task as done:"
            } else {
                "OK, I've marked this task as not done yet:"
            };
            frame(&[header, &format!("  {}", task)]);
        }
        Outcome::Matches(tasks) => numbered(
            tasks,
            "Here are the tasks in your list containing this keyword:",
            "You have no task containing this keyword",
        ),
    }
}

fn acknowledged(header: &str, task: &str, total: usize) {
    frame(&[
        header,
        &format!("  {}", task),
        &format!("Now you have {} tasks in the list.", total),
    ]);
}

fn numbered(tasks: &[String], header: &str, empty_msg: &str) {
    if tasks.is_empty() {
        frame(&[empty_msg]);
        return;
    }
    let mut lines = vec![header.to_string()];
    for (i, task) in tasks.iter().enumerate() {
        lines.push(format!("{}.{}", i + 1, task));
    }
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    frame(&refs);
}

/// Sandwich the response between two horizontal rules.
fn frame(lines: &[&str]) {
    println!("{}", LINE);
    for line in lines {
        println!(" {}", line);
    }
    println!("{}", LINE);
}
