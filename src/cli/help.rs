//! Usage help and version banner

use std::io::{self, Write};

use super::output::{Output, Tone};

const USAGE: &str = "\
Usage: nodo <action> [arguments]

  Available actions and options:
    nodo ls                          Show all lists and tasks to do
    nodo ls lists                    Show all lists and number of tasks in each one
    nodo ls <list_name>              Show content of list
    nodo ls done                     Show all done tasks
    nodo ls done <n>                 Show the last n done tasks
    nodo ls removed                  Show all removed tasks

    nodo <task_id>                   Show details of a task
    nodo show <task_id>              Show details of a task
    nodo show list <list_name>       Show a list and its number of tasks

    nodo add <task_name>             Add a new task to the default list
    nodo add <list_name> <task_name> Add a new task to list
    nodo add list <list_name>        Add a new list

    nodo done <task_id>              Mark a task as done
    nodo undo <task_id>              Mark a task as not done

    nodo star <task_id>              Star a task (will display with different color)
    nodo unstar <task_id>            Unstar a task

    nodo rm <task_id>                Remove task
    nodo rm list <list_name>         Remove list

    nodo restore <task_id>           Restore task
    nodo restore list <list_name>    Restore list

    nodo move <task_id> <list_name>  Moves a task to a list

    nodo help                        Show this help
    nodo version                     Show version";

const BANNER: [&str; 6] = [
    "d8b   db  .d88b.  d8888b.  .d88b.",
    "888o  88 .8P  Y8. 88  `8D .8P  Y8.",
    "88V8o 88 88    88 88   88 88    88",
    "88 V8o88 88    88 88   88 88    88",
    "88  V888 `8b  d8' 88  .8D `8b  d8'",
    "VP   V8P  `Y88P'  Y8888D'  `Y88P'",
];

pub fn show_help<W: Write>(out: &mut Output<W>) -> io::Result<()> {
    for line in USAGE.lines() {
        out.line(line)?;
    }

    Ok(())
}

pub fn show_version<W: Write>(out: &mut Output<W>, version: &str) -> io::Result<()> {
    out.blank()?;
    for line in BANNER {
        out.line(line)?;
    }
    out.blank()?;
    out.line("The Simple Command Line Task Manager")?;
    out.blank()?;

    let version_line = format!("Version {}", out.paint(version, Tone::Strong));
    out.line(&version_line)?;
    out.blank()
}
