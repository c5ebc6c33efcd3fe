//! HTML pages

use axum::response::Html;

const HOME_PAGE: &str = r#"<html>
<head><title>Biblio</title></head>
<body>
    <h1>Library Catalog</h1>
    <h2>Add an Author</h2>
    <form action="/authors" method="POST">
        <label for="name">Name:</label>
        <input type="text" id="name" name="name" required><br><br>
        <input type="submit" value="Add Author">
    </form>
    <h2>Add a Book</h2>
    <form action="/books" method="POST">
        <label for="title">Title:</label>
        <input type="text" id="title" name="title" required><br><br>
        <label for="author">Author:</label>
        <input type="text" id="author" name="author" required><br><br>
        <input type="submit" value="Add Book">
    </form>
    <a href="/authors">View Authors</a><br>
    <a href="/books">View Books</a><br>
    <a href="/health">Health Check</a>
</body>
</html>
"#;

/// Home page with author and book entry forms
pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}
