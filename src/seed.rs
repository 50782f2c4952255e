//! Default public-site content.
//!
//! Written to `public/` on first run so the portal works out of the box.
//! Existing files are never overwritten — edit them on disk and they stick.
//! This is opaque seed data; no request-handling logic depends on it.

/// `(file name, contents)` pairs materialised under `public/` at bootstrap.
pub const PUBLIC_FILES: &[(&str, &str)] = &[
    ("index.html", INDEX_HTML),
    ("productos.html", PRODUCTOS_HTML),
    ("contacto.html", CONTACTO_HTML),
    ("login.html", LOGIN_HTML),
    ("estilos.css", ESTILOS_CSS),
];

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="es">
<head>
  <meta charset="utf-8">
  <title>AgroTrack - Portal Interno</title>
  <link rel="stylesheet" href="/estilos.css">
</head>
<body>
  <header>
    <div class="logo">
      <h1>🌾 AgroTrack</h1>
      <p class="slogan">Tecnología al servicio del campo</p>
    </div>
    <nav>
      <a href="/">Inicio</a>
      <a href="/productos.html">Productos</a>
      <a href="/contacto">Contacto</a>
      <a href="/login">Login</a>
    </nav>
  </header>

  <main>
    <section class="hero">
      <h2>Bienvenido al portal interno de AgroTrack</h2>
      <p>Innovamos en soluciones tecnológicas para optimizar la producción agropecuaria.</p>
      <a class="boton-principal" href="/productos.html">Explorar Productos</a>
    </section>
  </main>

  <footer>
    <p>&copy; 2025 AgroTrack | Innovación y Sustentabilidad</p>
  </footer>
</body>
</html>
"#;

const PRODUCTOS_HTML: &str = r#"<!doctype html>
<html lang="es">
<head>
  <meta charset="utf-8">
  <title>Productos - AgroTrack</title>
  <link rel="stylesheet" href="/estilos.css">
</head>
<body>
  <header>
    <div class="logo">
      <h1>🌾 AgroTrack</h1>
    </div>
    <nav>
      <a href="/">Inicio</a>
      <a href="/productos.html" class="activo">Productos</a>
      <a href="/contacto">Contacto</a>
      <a href="/login">Login</a>
    </nav>
  </header>

  <main>
    <h2>Nuestros Productos</h2>
    <p>Soluciones tecnológicas para la gestión agroindustrial.</p>
    <div class="grid-productos">
      <div class="card">
        <h3>Sensor de Humedad C-210</h3>
        <p>Monitorea en tiempo real la humedad del suelo con conexión IoT.</p>
      </div>
      <div class="card">
        <h3>Semilla Premium S-001</h3>
        <p>Desarrollada para maximizar el rendimiento bajo diversas condiciones climáticas.</p>
      </div>
      <div class="card">
        <h3>Fertilizante Inteligente F-034</h3>
        <p>Optimiza nutrientes de forma automatizada según análisis del terreno.</p>
      </div>
    </div>
  </main>

  <footer>
    <p>&copy; 2025 AgroTrack | Tecnología para el crecimiento sostenible</p>
  </footer>
</body>
</html>
"#;

const CONTACTO_HTML: &str = r#"<!doctype html>
<html lang="es">
<head>
  <meta charset="utf-8">
  <title>Contacto - AgroTrack</title>
  <link rel="stylesheet" href="/estilos.css">
</head>
<body>
  <header>
    <div class="logo">
      <h1>🌾 AgroTrack</h1>
    </div>
    <nav>
      <a href="/">Inicio</a>
      <a href="/productos.html">Productos</a>
      <a href="/contacto" class="activo">Contacto</a>
      <a href="/login">Login</a>
    </nav>
  </header>

  <main>
    <h2>Contáctenos</h2>
    <p>Complete el siguiente formulario para enviarnos su consulta:</p>

    <form class="formulario" action="/contacto/cargar" method="POST">
      <label>Nombre:</label>
      <input type="text" name="nombre" required>

      <label>Email:</label>
      <input type="email" name="email" required>

      <label>Mensaje:</label>
      <textarea name="mensaje" rows="5" required></textarea>

      <button type="submit">Enviar Consulta</button>
    </form>

    <div class="acciones">
      <a href="/contacto/listar">📜 Ver consultas recibidas</a>
    </div>
  </main>

  <footer>
    <p>&copy; 2025 AgroTrack | Innovación en gestión agropecuaria</p>
  </footer>
</body>
</html>
"#;

const LOGIN_HTML: &str = r#"<!doctype html>
<html lang="es">
<head>
  <meta charset="utf-8">
  <title>Login - AgroTrack</title>
  <link rel="stylesheet" href="/estilos.css">
</head>
<body>
  <header>
    <div class="logo">
      <h1>🌾 AgroTrack</h1>
    </div>
    <nav>
      <a href="/">Inicio</a>
      <a href="/productos.html">Productos</a>
      <a href="/contacto">Contacto</a>
      <a href="/login" class="activo">Login</a>
    </nav>
  </header>

  <main>
    <h2>Ingreso al Portal</h2>
    <p>Ingrese sus credenciales de acceso.</p>

    <form class="formulario" action="/auth/recuperar" method="POST">
      <label>Usuario:</label>
      <input type="text" name="usuario" required>

      <label>Clave:</label>
      <input type="password" name="clave" required>

      <button type="submit">Acceder</button>
    </form>
  </main>

  <footer>
    <p>&copy; 2025 AgroTrack | Portal Interno</p>
  </footer>
</body>
</html>
"#;

const ESTILOS_CSS: &str = r#"/* ================================
   AgroTrack - Estilos Generales
   Paleta: Verde Bosque (#1D713B), Fondo Gris Claro (#F7F7F7)
   ================================ */

* {
  box-sizing: border-box;
}

body {
  font-family: Arial, Helvetica, sans-serif;
  background-color: #F7F7F7;
  color: #222;
  margin: 0;
  padding: 0;
}

header {
  background-color: #1D713B;
  color: #fff;
  padding: 20px;
  text-align: center;
}

header .logo h1 {
  margin: 0;
  font-size: 1.8em;
}

header .slogan {
  font-size: 0.9em;
  opacity: 0.9;
}

nav {
  margin-top: 10px;
}

nav a {
  color: #fff;
  text-decoration: none;
  margin: 0 10px;
  font-weight: bold;
  padding: 6px 10px;
  border-radius: 4px;
  transition: background-color 0.2s ease-in-out, opacity 0.2s;
}

nav a:hover {
  background-color: #14542B;
}

nav a.activo {
  background-color: #14542B;
}

main {
  max-width: 900px;
  margin: 30px auto;
  background: #fff;
  padding: 30px;
  border-radius: 10px;
  box-shadow: 0px 2px 5px rgba(0,0,0,0.1);
}

h2 {
  color: #1D713B;
  margin-top: 0;
}

p {
  line-height: 1.6;
}

.hero {
  text-align: center;
}

.boton-principal {
  display: inline-block;
  background-color: #1D713B;
  color: #fff;
  padding: 10px 20px;
  border-radius: 6px;
  text-decoration: none;
  font-weight: bold;
  transition: opacity 0.2s ease-in-out;
}

.boton-principal:hover {
  opacity: 0.9;
}

.grid-productos {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
  gap: 20px;
  margin-top: 20px;
}

.card {
  background-color: #fff;
  border: 1px solid #ddd;
  padding: 20px;
  border-radius: 10px;
  box-shadow: 0 1px 4px rgba(0,0,0,0.05);
  transition: transform 0.2s ease;
}

.card:hover {
  transform: translateY(-5px);
}

.formulario {
  display: flex;
  flex-direction: column;
  gap: 12px;
  margin-top: 20px;
}

.formulario input,
.formulario textarea {
  padding: 10px;
  border: 1px solid #ccc;
  border-radius: 6px;
  font-size: 1em;
}

.formulario input:focus,
.formulario textarea:focus {
  border-color: #1D713B;
  outline: none;
}

.formulario button {
  background-color: #1D713B;
  color: #fff;
  border: none;
  padding: 10px;
  border-radius: 6px;
  font-size: 1em;
  cursor: pointer;
  font-weight: bold;
  transition: background-color 0.2s ease-in-out;
}

.formulario button:hover {
  background-color: #14542B;
}

.acciones {
  margin-top: 20px;
}

.acciones a {
  color: #1D713B;
  text-decoration: none;
  font-weight: bold;
}

.acciones a:hover {
  text-decoration: underline;
}

footer {
  text-align: center;
  padding: 15px;
  background-color: #1D713B;
  color: #fff;
  margin-top: 40px;
  font-size: 0.9em;
}
"#;
