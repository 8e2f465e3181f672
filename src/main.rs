use std::io;
use std::io::{BufRead, Write};

use lim::books::domain::model::BookRecord;
use lim::catalog::domain::CatalogService;
use lim::catalog::factory;
use lim::core::domain::Configuration;

fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .init();
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn menu() -> io::Result<String> {
    println!();
    println!("========== Library Inventory Manager ==========");
    println!("1. Add Book");
    println!("2. Issue Book");
    println!("3. Return Book");
    println!("4. View All Books");
    println!("5. Search by Title");
    println!("6. Search by ISBN");
    println!("7. Exit");
    prompt("Enter choice (1-7): ")
}

fn add_book_flow(catalog: &mut dyn CatalogService) -> io::Result<()> {
    let title = prompt("Title: ")?;
    let author = prompt("Author: ")?;
    let isbn = prompt("ISBN: ")?;
    match catalog.add_book(BookRecord::new(&title, &author, &isbn)) {
        Ok(()) => println!("Book added."),
        Err(err) => println!("Error: {}", err),
    }
    Ok(())
}

fn issue_flow(catalog: &mut dyn CatalogService) -> io::Result<()> {
    let isbn = prompt("ISBN: ")?;
    let user = prompt("Issue to: ")?;
    match catalog.issue_book(&isbn, &user) {
        Ok(_) => println!("Book issued."),
        Err(err) => println!("Error: {}", err),
    }
    Ok(())
}

fn return_flow(catalog: &mut dyn CatalogService) -> io::Result<()> {
    let isbn = prompt("ISBN: ")?;
    match catalog.return_book(&isbn) {
        Ok(_) => println!("Book returned."),
        Err(err) => println!("Error: {}", err),
    }
    Ok(())
}

fn view_books(catalog: &dyn CatalogService) {
    let books = catalog.list_all();
    if books.is_empty() {
        println!("No books in catalog.");
        return;
    }
    for book in books {
        println!("{}", book);
    }
}

fn search_title(catalog: &dyn CatalogService) -> io::Result<()> {
    let text = prompt("Title contains: ")?;
    let res = catalog.search_by_title(&text);
    if res.is_empty() {
        println!("No results.");
        return Ok(());
    }
    for book in res {
        println!("{}", book);
    }
    Ok(())
}

fn search_isbn(catalog: &dyn CatalogService) -> io::Result<()> {
    let isbn = prompt("ISBN: ")?;
    match catalog.search_by_isbn(&isbn) {
        Ok(book) => println!("{}", book),
        Err(_) => println!("Not found."),
    }
    Ok(())
}

fn main() -> io::Result<()> {
    setup_tracing();

    let config = Configuration::default();
    let mut catalog = factory::create_catalog_service(&config);

    loop {
        match menu()?.as_str() {
            "1" => add_book_flow(catalog.as_mut())?,
            "2" => issue_flow(catalog.as_mut())?,
            "3" => return_flow(catalog.as_mut())?,
            "4" => view_books(catalog.as_ref()),
            "5" => search_title(catalog.as_ref())?,
            "6" => search_isbn(catalog.as_ref())?,
            "7" => {
                println!("Goodbye!");
                return Ok(());
            }
            _ => println!("Invalid option!"),
        }
    }
}
